use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::{Associativity, BinaryOperator};
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Reorders the given infix tokens into postfix order using the
/// shunting-yard algorithm.
///
/// The token stream is validated while it is reordered: operands and
/// operators must alternate, and parentheses must balance. No partial
/// output is produced on failure.
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    let mut open_parentheses: usize = 0;
    // Wherever an operand (or an opening parenthesis) is legal, an
    // operator is not, and vice versa.
    let mut expect_operand = true;

    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Digit(_) => {
                if !expect_operand {
                    return Err(SyntaxError::UnexpectedOperand);
                }
                output.push(token);
                expect_operand = false;
            }
            Token::OpenParenthesis => {
                operators.push_front(token);
                open_parentheses += 1;
                expect_operand = true;
            }
            Token::CloseParenthesis => {
                if open_parentheses == 0 {
                    return Err(SyntaxError::MismatchedParentheses);
                }
                drain_parenthesised_group(&mut operators, &mut output)?;
                open_parentheses -= 1;
                // A closed group behaves like a completed operand.
                expect_operand = false;
            }
            Token::Operator(incoming) => {
                if expect_operand {
                    return Err(SyntaxError::UnexpectedOperator);
                }
                drain_higher_precedence(&mut operators, &mut output, incoming);
                operators.push_front(token);
                expect_operand = true;
            }
        };
    }

    if open_parentheses != 0 {
        return Err(SyntaxError::MismatchedParentheses);
    }
    transfer_leftover_operators(&mut operators, &mut output);

    Ok(output)
}

/// Pops operators into the output until the matching open parenthesis,
/// which is popped and discarded.
fn drain_parenthesised_group(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop_front() {
            None => return Err(SyntaxError::MismatchedParentheses),
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

/// Pops operators that bind at least as tightly as the incoming one into
/// the output, stopping at an open parenthesis. Equal precedence pops
/// because every operator here is left-associative, so the earlier
/// operator must be emitted first.
fn drain_higher_precedence(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    incoming: BinaryOperator,
) {
    loop {
        let top = match operators.front() {
            Some(Token::Operator(top)) => *top,
            _ => break,
        };
        let pops = top.precedence_gt(&incoming)
            || (top.precedence_eq(&incoming)
                && incoming.associativity() == Associativity::Left);
        if !pops {
            break;
        }
        operators.pop_front();
        output.push(Token::Operator(top));
    }
}

fn transfer_leftover_operators(operators: &mut VecDeque<Token>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop_front() {
        output.push(operator);
    }
}
