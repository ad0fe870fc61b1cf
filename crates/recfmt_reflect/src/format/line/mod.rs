//! The line-oriented record format.

// -----------------------------------------------------------------------------
// Modules

mod decoder;
mod encoder;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// LineFormatter

use alloc::boxed::Box;
use alloc::sync::Arc;
use std::io::{BufRead, Write};

use crate::Reflect;
use crate::format::{DecodeOptions, FormatError, Formatter};
use crate::registry::TypeRegistry;
use crate::resolve::DescriptorResolver;

/// Encodes values as `@TypeName=` headed `name=value` lines.
///
/// Cloning a `LineFormatter` shares its [`DescriptorResolver`], and so
/// does building a [`JsonFormatter`] from [`resolver`](Self::resolver).
///
/// # Examples
///
/// ```
/// use recfmt_reflect::derive::Reflect;
/// use recfmt_reflect::format::{Formatter, FormatError, LineFormatter};
/// use recfmt_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect)]
/// #[reflect(type_name = "ServiceConfiguration")]
/// struct ServiceConfiguration {
///     #[reflect(name = "ConfigName")]
///     config_name: String,
///     #[reflect(name = "DatabaseHostName")]
///     database_host_name: String,
/// }
///
/// let mut types = TypeRegistry::new();
/// types.register::<ServiceConfiguration>();
/// let formatter = LineFormatter::new(types);
///
/// let err = formatter
///     .from_text("@TypeName=ServiceConfiguration\nConfigName=main\n")
///     .unwrap_err();
/// assert!(matches!(err, FormatError::MissingMember("DatabaseHostName")));
/// ```
///
/// [`JsonFormatter`]: crate::format::JsonFormatter
#[derive(Clone, Debug)]
pub struct LineFormatter {
    resolver: Arc<DescriptorResolver>,
    options: DecodeOptions,
}

impl LineFormatter {
    /// Creates a formatter with its own resolver over `types`.
    #[inline]
    pub fn new(types: TypeRegistry) -> Self {
        Self::with_resolver(Arc::new(DescriptorResolver::new(types)))
    }

    /// Creates a formatter sharing an existing resolver.
    #[inline]
    pub fn with_resolver(resolver: Arc<DescriptorResolver>) -> Self {
        Self {
            resolver,
            options: DecodeOptions::new(),
        }
    }

    /// Replaces the decode options.
    #[inline]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    #[inline]
    pub fn resolver(&self) -> &Arc<DescriptorResolver> {
        &self.resolver
    }

    /// Writes `value` as a record of the type named `type_name`.
    ///
    /// Fails with [`FormatError::Serialization`] if `value` is not an instance
    /// of that type.
    pub fn serialize_as(
        &self,
        value: &dyn Reflect,
        type_name: &str,
        writer: &mut dyn Write,
    ) -> Result<(), FormatError> {
        let descriptor = self.resolver.resolve(type_name)?;
        encoder::write_record(&descriptor, value, writer)
    }
}

impl Formatter for LineFormatter {
    fn serialize(&self, value: &dyn Reflect, writer: &mut dyn Write) -> Result<(), FormatError> {
        self.serialize_as(value, value.type_name(), writer)
    }

    fn deserialize(&self, reader: &mut dyn BufRead) -> Result<Box<dyn Reflect>, FormatError> {
        let mut lines = decoder::LineReader::new(reader);
        let type_name = lines.read_header()?;
        let descriptor = self.resolver.resolve(&type_name)?;
        let members = lines.read_members()?;
        crate::format::record::materialize(&descriptor, &members, &self.options)
    }
}
