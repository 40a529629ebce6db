//! Error handling for the huffstream library
//!
//! Every fallible operation in the crate reports one of the error kinds
//! defined here. Errors are terminal for the operation that produced them:
//! nothing is retried internally and no default value is ever substituted,
//! since silently skipping a symbol would break the round-trip guarantee.

use thiserror::Error;

/// Main error type for the huffstream library
#[derive(Error, Debug)]
pub enum HuffError {
    /// I/O related errors from container read/write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input rejected before any work was done (e.g. empty input to encode,
    /// empty frequency table to tree construction)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input
        message: String,
    },

    /// An input symbol has no entry in the supplied code table
    ///
    /// Cannot happen when the table was derived from the same input; it
    /// indicates a stale or mismatched externally supplied table.
    #[error("Unknown symbol: byte {symbol:#04x} not present in code table")]
    UnknownSymbol {
        /// The offending input byte
        symbol: u8,
    },

    /// Decoding encountered data that is not a valid bit stream for the tree
    /// (a non-binary bit value, or a stream ending mid-code)
    #[error("Malformed payload: {message}")]
    MalformedPayload {
        /// Description of the malformation
        message: String,
    },

    /// A persisted container's declared sizes disagree with its actual bytes
    #[error("Corrupt container: {message}")]
    CorruptContainer {
        /// Description of the inconsistency
        message: String,
    },
}

impl HuffError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error
    pub fn unknown_symbol(symbol: u8) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Create a malformed payload error
    pub fn malformed_payload<S: Into<String>>(message: S) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a corrupt container error
    pub fn corrupt_container<S: Into<String>>(message: S) -> Self {
        Self::CorruptContainer {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidInput { .. } => "input",
            Self::UnknownSymbol { .. } => "symbol",
            Self::MalformedPayload { .. } => "payload",
            Self::CorruptContainer { .. } => "container",
        }
    }

    /// Check if this error is worth retrying at the caller's level
    ///
    /// Only I/O errors are transient; the data-level kinds describe inputs
    /// that will fail the same way every time.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HuffError>;
