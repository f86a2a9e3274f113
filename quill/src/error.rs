//! Error handling for rendering
//!
//! Compiling fails with a [`ParseError`]. Rendering fails only when a tag
//! handler returns an error, or when data passed to
//! [`Template::render_serialize`](crate::Template::render_serialize) cannot be
//! converted. Unknown tags and missing data keys are not errors.

use std::{error::Error as StdError, fmt::Display};

use quill_parser::ParseError;

/// Error returned by tag and filter handlers
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Error type for render failures
#[derive(Debug)]
pub enum RenderError {
    /// A tag handler failed
    Tag { name: String, source: BoxError },
    /// The data could not be converted to a JSON value
    Data(serde_json::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Tag { name, source } => write!(f, "tag {} failed: {}", name, source),
            RenderError::Data(err) => write!(f, "invalid template data: {}", err),
        }
    }
}

impl StdError for RenderError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RenderError::Tag { source, .. } => Some(source.as_ref()),
            RenderError::Data(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Data(err)
    }
}

/// Either a compile or a render failure, returned by one-shot rendering
#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Render(RenderError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "syntax error: {}", err),
            Error::Render(err) => Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Render(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Render(err)
    }
}

/// Result type for one-shot rendering
pub type Result<T> = std::result::Result<T, Error>;
