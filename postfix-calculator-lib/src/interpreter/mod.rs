pub mod error;
pub mod evaluator;
mod infix_converter;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::debug;
use crate::interpreter::error::{ExpressionError, SyntaxError};
use crate::interpreter::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Evaluates the given single-digit infix expression to an integer.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using operands 0–9,
/// the operators `+ - * /` and parentheses.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluate_expression;
///
/// let result = evaluate_expression("3 + 4 * 2".to_string())?;
/// assert_eq!(result, 11);
/// # Ok::<(), postfix_calculator::interpreter::error::ExpressionError>(())
/// ```
pub fn evaluate_expression(expression: String) -> Result<i32, ExpressionError> {
    let postfix = convert(expression)?;
    debug!(&postfix);
    let result = evaluator::evaluate_postfix(postfix)?;
    Ok(result)
}

/// Converts the given infix expression into an equivalent space-delimited
/// postfix (reverse Polish) expression.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent postfix expression, in text.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::convert;
///
/// let postfix = convert("3 + 4 * 2".to_string())?;
/// assert_eq!(postfix, "3 4 2 * +");
/// # Ok::<(), postfix_calculator::interpreter::error::SyntaxError>(())
/// ```
pub fn convert(expression: String) -> Result<String, SyntaxError> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = infix_to_postfix(tokens)?;
    Ok(tokens_to_string(&postfix_tokens))
}

/// Renders the given tokens as text, separated by single spaces.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
