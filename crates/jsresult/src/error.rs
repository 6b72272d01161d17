use thiserror::Error;

/// Contract violations raised directly by the containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Option.Some cannot be called with undefined or null")]
    InvalidConstruction,
    #[error("Cannot unwrap None Option")]
    UnwrapOnNone,
}
