//! Token representation and the fixed operator/paren/constant symbol table.

/// A binary or unary operator in the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Eq,
    Impl,
}

impl Operator {
    /// Number of operands this operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }

    /// Precedence used by the shunting-yard conversion (higher binds tighter).
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 2,
            Operator::And | Operator::Or | Operator::Xor => 1,
            Operator::Eq | Operator::Impl => 0,
        }
    }

    /// The literal symbol as it appears in source text.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Eq => "==",
            Operator::Impl => "=>",
        }
    }
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Op(Operator),
    ParenLeft,
    ParenRight,
    ConstFalse,
    ConstTrue,
    Var(String),
}

/// The fixed symbol table, tried in order so that multi-character symbols
/// (`=>`, `==`) are matched before any single-character symbol that might
/// share a prefix with them. There is no such overlap today, but a lexer
/// that scans this table longest-symbol-first remains correct if one is
/// ever added.
pub const SYMBOL_TABLE: &[(&str, Token)] = &[
    ("=>", Token::Op(Operator::Impl)),
    ("==", Token::Op(Operator::Eq)),
    ("&", Token::Op(Operator::And)),
    ("|", Token::Op(Operator::Or)),
    ("^", Token::Op(Operator::Xor)),
    ("!", Token::Op(Operator::Not)),
    ("(", Token::ParenLeft),
    (")", Token::ParenRight),
    ("0", Token::ConstFalse),
    ("1", Token::ConstTrue),
];
