//! A ready-made error type for fallible callbacks.
//!
//! The collection operations never construct or inspect errors; whatever a
//! callback returns in its `Err` arm reaches the caller untouched. This type
//! exists for callers who have no error type of their own and want to write
//! callbacks with `?`.

use std::num::ParseIntError;

/// Result type alias for callbacks using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for predicate, transform and key extractor callbacks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A predicate could not decide about an element
    #[error("predicate failed at index {index}: {message}")]
    Predicate { index: usize, message: String },

    /// A transform could not produce a value
    #[error("transform failed: {message}")]
    Transform {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A key extractor could not derive a key
    #[error("failed to extract key from '{element}': {message}")]
    KeyExtraction { element: String, message: String },

    /// Anything else a callback wants to report
    #[error("{message}")]
    Custom { message: String },
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Self {
        Error::Transform {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Custom {
            message: format!("{error:#}"),
        }
    }
}

impl Error {
    /// Create a predicate error for the element at `index`
    #[must_use]
    pub fn predicate(index: usize, message: impl Into<String>) -> Self {
        Error::Predicate {
            index,
            message: message.into(),
        }
    }

    /// Create a transform error
    #[must_use]
    pub fn transform(message: impl Into<String>) -> Self {
        Error::Transform {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transform error with a source error
    #[must_use]
    pub fn transform_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Transform {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a key extraction error
    #[must_use]
    pub fn key_extraction(element: impl Into<String>, message: impl Into<String>) -> Self {
        Error::KeyExtraction {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Create a free-form error
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Error::Custom {
            message: message.into(),
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Custom {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Custom {
                message: format!("{}: {}", f(), base_error),
            }
        })
    }
}
