use thiserror::Error;

/// Errors raised while computing a covering subnet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("No addresses given, a covering subnet needs at least one.")]
    EmptyInput,

    #[error("Prefix length {0} should equal or less then 32.")]
    InvalidPrefixLength(u8),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Reading addresses failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for SubnetError {
    fn from(e: std::io::Error) -> Self {
        SubnetError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SubnetError>;
