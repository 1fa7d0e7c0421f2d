use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },
    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),
    #[error("empty expression")]
    EmptyExpression,
}
