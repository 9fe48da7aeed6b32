//! Evaluator: executes an RPN token stream against a variable assignment.

use std::collections::HashMap;

use super::token::{Operator, Token};

/// Evaluate `rpn` with `values` giving each variable's Boolean value.
///
/// Pushes constants and variable values, pops one operand for NOT and two
/// (right then left) for every binary operator. The stack must hold exactly
/// one value at the end; any other outcome means the RPN was malformed,
/// which cannot happen for RPN produced by [`super::parser::parse`] and is
/// therefore treated as a programmer error, not a recoverable one.
pub fn evaluate(rpn: &[Token], values: &HashMap<&str, bool>) -> bool {
    let mut stack: Vec<bool> = Vec::with_capacity(rpn.len());

    for token in rpn {
        match token {
            Token::ConstFalse => stack.push(false),
            Token::ConstTrue => stack.push(true),
            Token::Var(name) => {
                let value = *values
                    .get(name.as_str())
                    .unwrap_or_else(|| panic!("unbound variable '{name}' in evaluator"));
                stack.push(value);
            }
            Token::Op(Operator::Not) => {
                let a = stack.pop().expect("evaluator stack underflow on NOT");
                stack.push(!a);
            }
            Token::Op(op) => {
                let b = stack.pop().expect("evaluator stack underflow (rhs)");
                let a = stack.pop().expect("evaluator stack underflow (lhs)");
                let result = match op {
                    Operator::And => a && b,
                    Operator::Or => a || b,
                    Operator::Xor => a != b,
                    Operator::Eq => a == b,
                    Operator::Impl => !a || b,
                    Operator::Not => unreachable!("handled above"),
                };
                stack.push(result);
            }
            Token::ParenLeft | Token::ParenRight => {
                unreachable!("parentheses never appear in RPN")
            }
        }
    }

    assert_eq!(stack.len(), 1, "malformed RPN: residual stack after evaluation");
    stack.pop().unwrap()
}
