// error.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error("{0:?} is not a valid operation")]
    UnknownOperator(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("the operation history is full")]
    HistoryFull,
    #[error("the operation history is empty")]
    HistoryEmpty,
}
