use crate::interpreter::error::SyntaxError;
use crate::interpreter::token::Token;

/// Scans the given expression into tokens, one character at a time.
///
/// Whitespace carries no meaning and is discarded. Every other character
/// must be a digit, an operator or a parenthesis; anything else fails
/// with [`SyntaxError::InvalidCharacter`].
pub fn tokenize(expression: String) -> Result<Vec<Token>, SyntaxError> {
    expression
        .chars()
        .filter(|character| !character.is_whitespace())
        .map(Token::try_from)
        .collect()
}
