//! The error value handed back to callers

use crate::render::SharedError;
use std::error::Error;
use std::fmt;

/// An error identified by id, carrying its localized message and an optional cause
#[derive(Debug, Clone)]
pub struct LocalizedError {
    id: String,
    message: String,
    cause: Option<SharedError>,
}

impl LocalizedError {
    /// Assemble an error from already rendered parts
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        cause: Option<SharedError>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            cause,
        }
    }

    /// Error id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rendered message without the id prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wrapped cause, if any
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// `"<id>: <message>"` with the id right-aligned to 8 columns
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LocalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}: {}", self.id, self.message)
    }
}

impl Error for LocalizedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
