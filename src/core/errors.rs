/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors returned when parsing, validating, or comparing addresses and CIDR ranges.
///
/// Every variant carries the offending text so callers can log or report it. None of these
/// errors are fatal; callers making trust decisions on untrusted input should treat any error as
/// "does not match".
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CidrError {
    /// Malformed address or CIDR text (wrong segment count, bad digits, multiple `::`, ...).
    #[error("Invalid address or CIDR `{text}`: {reason}")]
    Parse { text: String, reason: &'static str },

    /// Syntactically parseable, but semantically invalid (octet or prefix length out of range).
    #[error("Invalid value in `{text}`: {reason}")]
    Validation { text: String, reason: &'static str },

    /// An IPv4 address was compared with an IPv6 range (or vice versa).
    #[error("Address family mismatch: `{address}` cannot be compared with `{range}`")]
    FamilyMismatch { address: String, range: String },
}

impl CidrError {
    pub(crate) fn parse(text: &str, reason: &'static str) -> Self {
        CidrError::Parse {
            text: text.to_string(),
            reason,
        }
    }

    pub(crate) fn validation(text: &str, reason: &'static str) -> Self {
        CidrError::Validation {
            text: text.to_string(),
            reason,
        }
    }

    /// Check if the error is a [CidrError::Parse] error.
    pub fn is_parse(&self) -> bool {
        matches!(self, CidrError::Parse { .. })
    }

    /// Check if the error is a [CidrError::Validation] error.
    pub fn is_validation(&self) -> bool {
        matches!(self, CidrError::Validation { .. })
    }
}

// Error type alias used throughout the crate.
pub type Error = CidrError;

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
