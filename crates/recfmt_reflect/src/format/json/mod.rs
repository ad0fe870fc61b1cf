//! The record as a single JSON object.
//!
//! ```text
//! {"@TypeName":"<type name>","<member name>":"<text>",...}
//! ```
//!
//! Every member value is a JSON string holding the same text the line format
//! would carry, members follow the header in declaration order.

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// JsonFormatter

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::io::{BufRead, Write};

use serde_core::Deserializer;

use crate::Reflect;
use crate::format::record::{check_instance, materialize, member_text};
use crate::format::{DecodeOptions, FormatError, Formatter};
use crate::registry::TypeRegistry;
use crate::resolve::DescriptorResolver;

/// Encodes values as JSON objects through `serde_json`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use recfmt_reflect::derive::Reflect;
/// use recfmt_reflect::format::{Formatter, JsonFormatter, LineFormatter};
/// use recfmt_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// #[reflect(type_name = "Probe")]
/// struct Probe {
///     #[reflect(name = "Target")]
///     target: String,
///     #[reflect(name = "Interval")]
///     interval: u32,
/// }
///
/// let mut types = TypeRegistry::new();
/// types.register::<Probe>();
/// let line = LineFormatter::new(types);
/// let json = JsonFormatter::with_resolver(Arc::clone(line.resolver()));
///
/// let probe = line.from_text("@TypeName=Probe\nTarget=10.0.0.1\nInterval=5\n").unwrap();
/// assert_eq!(
///     json.to_text(&*probe).unwrap(),
///     r#"{"@TypeName":"Probe","Target":"10.0.0.1","Interval":"5"}"#,
/// );
/// ```
#[derive(Clone, Debug)]
pub struct JsonFormatter {
    resolver: Arc<DescriptorResolver>,
    options: DecodeOptions,
    pretty: bool,
}

impl JsonFormatter {
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
            pretty: false,
        }
    }

    /// Replaces the decode options.
    #[inline]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Writes indented output when `pretty` is `true`.
    #[inline]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
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
    /// Every member is converted before anything is written, so a failed
    /// conversion leaves `writer` untouched.
    pub fn serialize_as(
        &self,
        value: &dyn Reflect,
        type_name: &str,
        writer: &mut dyn Write,
    ) -> Result<(), FormatError> {
        let descriptor = self.resolver.resolve(type_name)?;
        check_instance(&descriptor, value)?;

        let members = descriptor
            .members()
            .iter()
            .map(|member| -> Result<_, FormatError> {
                Ok((member.name(), member_text(&descriptor, member, value)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let record = ser::RecordSerializer {
            type_name: descriptor.type_name(),
            members: &members,
        };

        if self.pretty {
            serde_json::to_writer_pretty(writer, &record)?;
        } else {
            serde_json::to_writer(writer, &record)?;
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn serialize(&self, value: &dyn Reflect, writer: &mut dyn Write) -> Result<(), FormatError> {
        self.serialize_as(value, value.type_name(), writer)
    }

    fn deserialize(&self, reader: &mut dyn BufRead) -> Result<Box<dyn Reflect>, FormatError> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let record = (&mut deserializer).deserialize_map(de::RecordVisitor)?;
        deserializer.end()?;
        let descriptor = self.resolver.resolve(&record.type_name)?;
        materialize(&descriptor, &record.members, &self.options)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::JsonFormatter;
    use crate::derive::Reflect;
    use crate::format::{DecodeOptions, DuplicatePolicy, FormatError, Formatter, LineFormatter};
    use crate::registry::TypeRegistry;

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(type_name = "ServiceConfiguration")]
    struct ServiceConfiguration {
        #[reflect(name = "ConfigName")]
        config_name: String,
        #[reflect(name = "Port")]
        port: u16,
        #[reflect(name = "Verbose")]
        verbose: bool,
    }

    fn sample() -> ServiceConfiguration {
        ServiceConfiguration {
            config_name: "main".into(),
            port: 8080,
            verbose: false,
        }
    }

    fn formatter() -> JsonFormatter {
        let mut types = TypeRegistry::new();
        types.register::<ServiceConfiguration>();
        JsonFormatter::new(types)
    }

    #[test]
    fn header_first_and_values_as_strings() {
        let text = formatter().to_text(&sample()).unwrap();
        assert_eq!(
            text,
            r#"{"@TypeName":"ServiceConfiguration","ConfigName":"main","Port":"8080","Verbose":"false"}"#
        );

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Port"], serde_json::Value::String("8080".into()));
    }

    #[test]
    fn round_trip_with_line_breaks() {
        let formatter = formatter().pretty(true);
        let mut value = sample();
        value.config_name = "two\nlines".into();

        let text = formatter.to_text(&value).unwrap();
        assert!(text.contains('\n'));
        let back: ServiceConfiguration = formatter.deserialize_as(&mut text.as_bytes()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn header_anywhere_and_missing() {
        let formatter = formatter();
        let value: ServiceConfiguration = formatter
            .deserialize_as(
                &mut r#"{"Port":"1","@TypeName":"ServiceConfiguration","Verbose":"true","ConfigName":"x"}"#
                    .as_bytes(),
            )
            .unwrap();
        assert_eq!(value.port, 1);
        assert!(value.verbose);

        let err = formatter.from_text(r#"{"Port":"1"}"#).unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
        assert!(err.to_string().contains("@TypeName"));
    }

    #[test]
    fn rejects_non_string_values_and_trailing_data() {
        let formatter = formatter();
        let err = formatter
            .from_text(r#"{"@TypeName":"ServiceConfiguration","Port":8080}"#)
            .unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));

        let err = formatter
            .from_text(r#"{"@TypeName":"ServiceConfiguration"} {}"#)
            .unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
    }

    #[test]
    fn shared_errors_and_options() {
        let text = r#"{"@TypeName":"ServiceConfiguration","ConfigName":"a","ConfigName":"b","Port":"1","Verbose":"true"}"#;

        let err = formatter().from_text(text).unwrap_err();
        assert!(matches!(err, FormatError::DuplicateMember(_)));

        let formatter = formatter()
            .with_options(DecodeOptions::new().with_duplicates(DuplicatePolicy::LastWins));
        let value: ServiceConfiguration = formatter.deserialize_as(&mut text.as_bytes()).unwrap();
        assert_eq!(value.config_name, "b");

        let err = formatter
            .from_text(r#"{"@TypeName":"ServiceConfiguration","ConfigName":"a","Verbose":"true"}"#)
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingMember("Port")));
    }

    #[test]
    fn shares_resolver_with_line_formatter() {
        let json = formatter();
        let line = LineFormatter::with_resolver(Arc::clone(json.resolver()));

        let value = line
            .from_text("@TypeName=ServiceConfiguration\nConfigName=x\nPort=9\nVerbose=true\n")
            .unwrap();
        let text = json.to_text(&*value).unwrap();
        let back = json.from_text(&text).unwrap();

        assert_eq!(line.to_text(&*back).unwrap(), line.to_text(&*value).unwrap());
        assert_eq!(json.resolver().cached_len(), 1);
    }
}
