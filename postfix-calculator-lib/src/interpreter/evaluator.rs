use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Reduces the given space-delimited postfix expression to a single integer.
///
/// Digits push their value onto an operand stack; operators pop the two
/// topmost values (the more recently pushed value being the right operand)
/// and push `left OP right`. A well-formed stream leaves exactly one value
/// on the stack, which is the result.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluator::evaluate_postfix;
///
/// let result = evaluate_postfix("3 4 +".to_string())?;
/// assert_eq!(result, 7);
/// # Ok::<(), postfix_calculator::interpreter::error::EvalError>(())
/// ```
pub fn evaluate_postfix(postfix: String) -> Result<i32, EvalError> {
    let mut operands: Vec<i32> = vec![];

    for lexeme in postfix.split_whitespace() {
        match parse_lexeme(lexeme)? {
            Token::Digit(value) => operands.push(value),
            Token::Operator(operator) => {
                let right = operands.pop().ok_or(EvalError::InsufficientOperands)?;
                let left = operands.pop().ok_or(EvalError::InsufficientOperands)?;
                operands.push(operator.evaluate(left, right)?);
            }
            _ => return Err(EvalError::InvalidToken(lexeme.to_string())),
        }
    }

    if operands.len() > 1 {
        return Err(EvalError::TooManyOperands);
    }
    operands.pop().ok_or(EvalError::InsufficientOperands)
}

/// A postfix lexeme is a single digit or operator character; parentheses
/// never survive conversion, so they are rejected along with everything
/// else by the caller.
fn parse_lexeme(lexeme: &str) -> Result<Token, EvalError> {
    lexeme
        .chars()
        .exactly_one()
        .ok()
        .and_then(|character| Token::try_from(character).ok())
        .ok_or_else(|| EvalError::InvalidToken(lexeme.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_operator_stream_evaluates() {
        let result = evaluate_postfix("3 4 +".to_string()).unwrap();
        assert_eq!(result, 7)
    }

    #[test]
    fn right_operand_is_most_recently_pushed() {
        // 8 2 - is 8 - 2, not 2 - 8.
        let result = evaluate_postfix("8 2 -".to_string()).unwrap();
        assert_eq!(result, 6)
    }

    #[test]
    fn lone_digit_evaluates_to_itself() {
        let result = evaluate_postfix("5".to_string()).unwrap();
        assert_eq!(result, 5)
    }

    #[test]
    fn leftover_operand_returns_error() {
        let error = evaluate_postfix("3 4".to_string()).unwrap_err();
        assert_eq!(error, EvalError::TooManyOperands)
    }

    #[test]
    fn operator_without_operands_returns_error() {
        let error = evaluate_postfix("3 +".to_string()).unwrap_err();
        assert_eq!(error, EvalError::InsufficientOperands)
    }

    #[test]
    fn empty_stream_returns_error() {
        let error = evaluate_postfix(String::new()).unwrap_err();
        assert_eq!(error, EvalError::InsufficientOperands)
    }

    #[test]
    fn division_by_zero_returns_error() {
        let error = evaluate_postfix("5 0 /".to_string()).unwrap_err();
        assert_eq!(error, EvalError::DivisionByZero)
    }

    #[test]
    fn multi_character_lexeme_returns_error() {
        let error = evaluate_postfix("12 3 +".to_string()).unwrap_err();
        assert_eq!(error, EvalError::InvalidToken("12".to_string()))
    }

    #[test]
    fn parenthesis_lexeme_returns_error() {
        let error = evaluate_postfix("( 3".to_string()).unwrap_err();
        assert_eq!(error, EvalError::InvalidToken("(".to_string()))
    }
}
