use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Error categories shared across the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was absent or could not be decoded
    ParseFailure,
    /// A filesystem read failed
    Io,
    /// Internal error
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ErrorKind::ParseFailure => write!(f, "Parse Error"),
            ErrorKind::Io => write!(f, "I/O Error"),
            ErrorKind::InternalError => write!(f, "Internal Error"),
        }
    }
}

/// Base domain error carrying detailed context
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct DomainError {
    /// Error category
    pub kind: ErrorKind,
    /// Kind of entity involved (e.g. "TrashInfo", "TrashDir")
    pub entity_type: &'static str,
    /// Descriptive message
    pub message: String,
    /// Source error (optional)
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl DomainError {
    /// Creates a parse error for a required field that could not be decoded
    pub fn parse_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self {
            kind: ErrorKind::ParseFailure,
            entity_type,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an I/O error for a failed filesystem read
    pub fn io_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self {
            kind: ErrorKind::Io,
            entity_type,
            message: message.into(),
            source: None,
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, DomainError>;

/// Trait for attaching context to errors
pub trait ErrorContext<T, E> {
    fn with_error_kind(
        self,
        kind: ErrorKind,
        entity_type: &'static str,
    ) -> std::result::Result<T, DomainError>;
}

impl<T, E: StdError + Send + Sync + 'static> ErrorContext<T, E> for std::result::Result<T, E> {
    fn with_error_kind(
        self,
        kind: ErrorKind,
        entity_type: &'static str,
    ) -> std::result::Result<T, DomainError> {
        self.map_err(|e| DomainError {
            kind,
            entity_type,
            message: format!("{}", e),
            source: Some(Box::new(e)),
        })
    }
}

/// Macro converting specific error types to DomainError
#[macro_export]
macro_rules! impl_from_error {
    ($error_type:ty, $kind:expr, $entity_type:expr) => {
        impl From<$error_type> for DomainError {
            fn from(err: $error_type) -> Self {
                DomainError {
                    kind: $kind,
                    entity_type: $entity_type,
                    message: format!("{}", err),
                    source: Some(Box::new(err)),
                }
            }
        }
    };
}

impl_from_error!(std::io::Error, ErrorKind::Io, "IO");
impl_from_error!(serde_json::Error, ErrorKind::InternalError, "Serialization");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_kind() {
        let err = DomainError::parse_error("TrashInfo", "Unable to parse Path");
        assert_eq!(err.kind, ErrorKind::ParseFailure);
        assert_eq!(err.to_string(), "Parse Error: Unable to parse Path");
    }

    #[test]
    fn test_io_error_from_std() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: DomainError = io.into();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.source.is_some());
    }

    #[test]
    fn test_serialization_error_is_internal() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: DomainError = bad.unwrap_err().into();
        assert_eq!(err.kind, ErrorKind::InternalError);
        assert_eq!(err.entity_type, "Serialization");
    }

    #[test]
    fn test_with_error_kind_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let result: std::result::Result<(), _> = Err(io);
        let err = result.with_error_kind(ErrorKind::Io, "TrashDir").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
        assert_eq!(err.entity_type, "TrashDir");
        assert!(err.source.is_some());
    }

    #[test]
    fn test_every_kind_has_a_display_label() {
        assert_eq!(ErrorKind::ParseFailure.to_string(), "Parse Error");
        assert_eq!(ErrorKind::Io.to_string(), "I/O Error");
        assert_eq!(ErrorKind::InternalError.to_string(), "Internal Error");
    }
}
