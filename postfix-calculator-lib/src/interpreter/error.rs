use thiserror::Error;

/// Errors detected while converting an infix expression to postfix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An operand appeared where an operator was expected,
    /// e.g. two adjacent digits with nothing between them.
    #[error("unexpected operand")]
    UnexpectedOperand,
    /// An operator appeared where an operand was expected,
    /// e.g. two consecutive operators or a leading operator.
    #[error("unexpected operator")]
    UnexpectedOperator,
    /// A ')' with no unclosed '(', or an unclosed '(' at end of input.
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// A character that is not a digit, operator, parenthesis or whitespace.
    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),
}

/// Errors detected while evaluating a postfix expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    /// An operator was applied with fewer than two values on the operand stack.
    #[error("not enough operands")]
    InsufficientOperands,
    /// More than one value remained on the operand stack after evaluation.
    #[error("too many operands")]
    TooManyOperands,
    /// An arithmetic operation exceeded the range of the integer type.
    #[error("numeric overflow")]
    NumericOverflow,
    /// A whitespace-delimited lexeme that is not a single digit or operator.
    #[error("invalid postfix token: '{0}'")]
    InvalidToken(String),
}

/// Any failure to evaluate an infix expression end to end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),
}
