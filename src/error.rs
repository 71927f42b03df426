use thiserror::Error;

/// Failure raised when a value is extracted from an option without a fallback.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionError {
    #[error("Access the none value")]
    EmptyValueAccess,
}

pub type Result<T, E = OptionError> = std::result::Result<T, E>;
