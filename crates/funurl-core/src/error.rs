//! Error types shared by the core modules.
//!
//! Each concern gets its own enum so callers can match on the failure they
//! care about; the CLI folds them into `anyhow` at the process boundary.

use thiserror::Error;

/// Failure to turn an input string into a [`StructuredUrl`](crate::url_model::StructuredUrl),
/// or to rewrite one of its components.
#[derive(Debug, Error)]
pub enum UrlError {
    /// Input was empty after trimming.
    #[error("empty url")]
    Empty,
    /// Input is not a URL: bad syntax, or neither scheme nor host present.
    #[error("invalid url {input:?}: {reason}")]
    Malformed { input: String, reason: String },
    /// A component could not be replaced (e.g. switching to an incompatible scheme).
    #[error("cannot set {component} to {value:?}")]
    Modify {
        component: &'static str,
        value: String,
    },
}

impl UrlError {
    pub(crate) fn malformed(input: &str, reason: impl ToString) -> Self {
        UrlError::Malformed {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failure while assembling a batch of input URLs.
#[derive(Debug, Error)]
pub enum DedupeError {
    /// No non-blank input was supplied at all.
    #[error("no input provided")]
    NoInput,
    /// One of the candidates failed to parse; the whole run is aborted.
    #[error(transparent)]
    Url(#[from] UrlError),
    /// Reading candidates from the input stream failed.
    #[error("read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while decoding percent-escaped text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// `%` not followed by two hex digits.
    #[error("invalid URL escape {escape:?} at byte {position}")]
    InvalidEscape { position: usize, escape: String },
}
