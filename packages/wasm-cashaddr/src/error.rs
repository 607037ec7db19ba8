use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The cashaddr carries an explicit prefix that is not the expected one
    #[error("Invalid prefix for a cashaddr address: '{found}:', expected '{expected}:'")]
    PrefixMismatch { found: String, expected: String },

    #[error("Base58 error: {0}")]
    MalformedBase58(String),

    #[error("Cashaddr error: {0}")]
    MalformedCashAddr(String),

    #[error("Unknown address format: {0}")]
    UnknownFormat(String),
}

impl AddressError {
    pub(crate) fn base58(msg: impl Into<String>) -> Self {
        AddressError::MalformedBase58(msg.into())
    }

    pub(crate) fn cashaddr(msg: impl Into<String>) -> Self {
        AddressError::MalformedCashAddr(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
