use super::Error;

/// Error when the caller hands the engine malformed input.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// A bulk insert was requested with a chunk size of zero.
    ChunkSize { entity: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::ChunkSize { entity } => write!(
                f,
                "validation failed: bulk insert of `{entity}` needs a chunk size of at least 1"
            ),
        }
    }
}

impl Error {
    /// Creates a validation error for a bulk insert with a zero chunk size.
    pub fn invalid_chunk_size(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::ChunkSize {
                entity: entity.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }
}
