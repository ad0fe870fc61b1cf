use alloc::boxed::Box;
use alloc::string::String;
use std::io;

use thiserror::Error;

use crate::convert::ParseTextError;
use crate::resolve::ResolveError;

// -----------------------------------------------------------------------------
// FormatError

/// An error raised while encoding or decoding a record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("record is missing member `{0}`")]
    MissingMember(&'static str),

    #[error("member `{member}` cannot convert {text:?} to `{value_type}`: {source}")]
    TypeConversion {
        member: &'static str,
        value_type: &'static str,
        text: Box<str>,
        #[source]
        source: ParseTextError,
    },

    #[error("cannot serialize `{type_name}`: {reason}")]
    Serialization {
        type_name: &'static str,
        reason: String,
    },

    #[error("member `{0}` appears more than once")]
    DuplicateMember(Box<str>),

    #[error("member `{0}` does not belong to the record type")]
    UnknownMember(Box<str>),

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: &'static str },

    #[error("expected a `{expected}` record, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FormatError {
    /// Returns the [`ResolveError`] if resolving the record type failed.
    #[inline]
    pub fn as_resolve(&self) -> Option<&ResolveError> {
        match self {
            Self::Resolve(e) => Some(e),
            _ => None,
        }
    }
}
