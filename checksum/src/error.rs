use thiserror::Error;

/// ChecksumError is returned when a checkpoint line can not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// Rejected before any computation takes place.
    #[error("InvalidArgument: {reason} (start={start}, length={length})")]
    InvalidArgument { reason: String, start: i64, length: i64 },
}

impl ChecksumError {
    pub fn invalid_argument(reason: impl Into<String>, start: i64, length: i64) -> Self {
        ChecksumError::InvalidArgument {
            reason: reason.into(),
            start,
            length,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ChecksumError::InvalidArgument { .. })
    }
}
