use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single-digit operand, 0 through 9.
    Digit(i32),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

impl TryFrom<char> for Token {
    type Error = SyntaxError;

    fn try_from(character: char) -> Result<Token, Self::Error> {
        match character {
            '+' => Ok(Token::Operator(BinaryOperator::Add)),
            '-' => Ok(Token::Operator(BinaryOperator::Subtract)),
            '*' => Ok(Token::Operator(BinaryOperator::Multiply)),
            '/' => Ok(Token::Operator(BinaryOperator::Divide)),
            '(' => Ok(Token::OpenParenthesis),
            ')' => Ok(Token::CloseParenthesis),
            character => match character.to_digit(10) {
                Some(value) => Ok(Token::Digit(value as i32)),
                None => Err(SyntaxError::InvalidCharacter(character)),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_character_converts_to_digit_token() {
        let token = Token::try_from('7').unwrap();
        assert_eq!(token, Token::Digit(7))
    }

    #[test]
    fn operator_characters_convert_to_operator_tokens() {
        let expected = [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        ];
        for (character, operator) in "+-*/".chars().zip(expected) {
            let token = Token::try_from(character).unwrap();
            assert_eq!(token, Token::Operator(operator))
        }
    }

    #[test]
    fn unrecognized_character_returns_error() {
        let error = Token::try_from('x').unwrap_err();
        assert_eq!(error, SyntaxError::InvalidCharacter('x'))
    }

    #[test]
    fn tokens_display_as_their_source_characters() {
        let tokens = [
            Token::Digit(3),
            Token::Operator(BinaryOperator::Multiply),
            Token::OpenParenthesis,
            Token::CloseParenthesis,
        ];
        let rendered: String = tokens.iter().map(Token::to_string).collect();
        assert_eq!(rendered, "3*()")
    }
}
