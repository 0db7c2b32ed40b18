use thiserror::Error;

/// Errors raised by interval-algebra operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("span of an empty interval list is undefined")]
    EmptyList,
}
