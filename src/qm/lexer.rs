//! Lexer: turns source text into a token stream.

use super::token::{Token, SYMBOL_TABLE};
use crate::error::ParseError;

/// Scan `expr` left to right, skipping spaces, matching the fixed symbol
/// table (longest match wins when more than one symbol could apply) and
/// otherwise consuming a maximal run of ASCII letters as a variable name.
///
/// Any other character is a lexical failure.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    'outer: while i < chars.len() {
        if chars[i] == ' ' {
            i += 1;
            continue;
        }

        for (symbol, token) in SYMBOL_TABLE {
            let symbol_chars: Vec<char> = symbol.chars().collect();
            let len = symbol_chars.len();
            if i + len <= chars.len() && chars[i..i + len] == symbol_chars[..] {
                tokens.push(token.clone());
                i += len;
                continue 'outer;
            }
        }

        if chars[i].is_ascii_alphabetic() {
            let begin = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let name: String = chars[begin..i].iter().collect();
            tokens.push(Token::Var(name));
            continue;
        }

        return Err(ParseError::UnrecognizedCharacter {
            ch: chars[i],
            position: i,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::token::Operator;

    #[test]
    fn tokenizes_operators_and_variables() {
        let tokens = tokenize("a & !b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Var("a".into()),
                Token::Op(Operator::And),
                Token::Op(Operator::Not),
                Token::Var("b".into()),
            ]
        );
    }

    #[test]
    fn multi_char_operators_take_priority() {
        let tokens = tokenize("a => b == c").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Var("a".into()),
                Token::Op(Operator::Impl),
                Token::Var("b".into()),
                Token::Op(Operator::Eq),
                Token::Var("c".into()),
            ]
        );
    }

    #[test]
    fn constants_and_parens() {
        let tokens = tokenize("(0 | 1)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::ParenLeft,
                Token::ConstFalse,
                Token::Op(Operator::Or),
                Token::ConstTrue,
                Token::ParenRight,
            ]
        );
    }

    #[test]
    fn rejects_unrecognized_character() {
        let err = tokenize("a & $b").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnrecognizedCharacter { ch: '$', position: 4 }
        );
    }

    #[test]
    fn variable_names_are_case_sensitive_and_multi_letter() {
        let tokens = tokenize("Foo & bar").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Var("Foo".into()),
                Token::Op(Operator::And),
                Token::Var("bar".into()),
            ]
        );
    }
}
