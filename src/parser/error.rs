use crate::quantity::ArithmeticError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,
    #[error("'{0}' does not match any quantity format")]
    NoMatch(String),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
