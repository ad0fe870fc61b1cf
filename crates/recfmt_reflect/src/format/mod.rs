//! Encode reflected records into text and decode them back.
//!
//! ## Menu
//!
//! - [`Formatter`]: The shared two-method contract, `serialize` and `deserialize`.
//! - [`LineFormatter`]: The line-oriented `@TypeName=` record format.
//! - [`JsonFormatter`]: The same record as one JSON object (feature `json`).
//! - [`DecodeOptions`]: How decoders treat duplicate and unknown members.
//! - [`FormatError`]: Everything that can go wrong while encoding or decoding.
//!
//! ## Record layout
//!
//! ```text
//! @TypeName=<type name>
//! <member name>=<text>
//! <member name>=<text>
//! ```
//!
//! Members are written in declaration order. Decoding splits each line at
//! the first `=`, so values may contain `=` but never a line break.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, BufRead, Write};

use crate::Reflect;
use crate::info::Typed;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod options;
mod record;

pub mod line;

#[cfg(feature = "json")]
pub mod json;

// -----------------------------------------------------------------------------
// Exports

pub use error::FormatError;
pub use line::LineFormatter;
pub use options::{DecodeOptions, DuplicatePolicy, UnknownMemberPolicy};

#[cfg(feature = "json")]
pub use json::JsonFormatter;

/// The key of the header entry naming the record type.
pub const TYPE_NAME_KEY: &str = "@TypeName";

/// Separates a member name from its text.
pub const DELIMITER: char = '=';

// -----------------------------------------------------------------------------
// Formatter

/// Converts reflected values to and from a byte stream.
///
/// Implementors own a shared [`DescriptorResolver`], so the descriptor cache
/// outlives single calls. Streams belong to the caller and are never closed.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::derive::Reflect;
/// use recfmt_reflect::format::{Formatter, LineFormatter};
/// use recfmt_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// #[reflect(type_name = "Lease")]
/// struct Lease {
///     #[reflect(name = "Owner")]
///     owner: String,
///     #[reflect(name = "Seconds")]
///     seconds: u32,
/// }
///
/// let mut types = TypeRegistry::new();
/// types.register::<Lease>();
/// let formatter = LineFormatter::new(types);
///
/// let lease = Lease { owner: "node-1".into(), seconds: 30 };
/// let mut out = Vec::new();
/// formatter.serialize(&lease, &mut out).unwrap();
/// assert_eq!(out, b"@TypeName=Lease\nOwner=node-1\nSeconds=30\n");
///
/// let back = formatter.deserialize(&mut out.as_slice()).unwrap();
/// assert_eq!(back.take::<Lease>().unwrap(), lease);
/// ```
///
/// [`DescriptorResolver`]: crate::resolve::DescriptorResolver
pub trait Formatter {
    /// Writes `value` as one record.
    ///
    /// On error, bytes that were already written stay in `writer`.
    fn serialize(&self, value: &dyn Reflect, writer: &mut dyn Write) -> Result<(), FormatError>;

    /// Reads one record up to the end of `reader` and rebuilds the value.
    ///
    /// On error, the partially populated instance is dropped.
    fn deserialize(&self, reader: &mut dyn BufRead) -> Result<Box<dyn Reflect>, FormatError>;

    /// Encodes `value` into a `String`.
    fn to_text(&self, value: &dyn Reflect) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.serialize(value, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| FormatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Decodes a value out of `text`.
    fn from_text(&self, text: &str) -> Result<Box<dyn Reflect>, FormatError> {
        self.deserialize(&mut text.as_bytes())
    }

    /// Reads one record and downcasts it to `T`.
    ///
    /// # Errors
    ///
    /// Besides every error of [`deserialize`](Self::deserialize), returns
    /// [`FormatError::TypeMismatch`] if the record names another type.
    fn deserialize_as<T: Typed>(&self, reader: &mut dyn BufRead) -> Result<T, FormatError>
    where
        Self: Sized,
    {
        self.deserialize(reader)?
            .take::<T>()
            .map_err(|found| FormatError::TypeMismatch {
                expected: T::record_info().type_name(),
                found: found.type_name(),
            })
    }
}
