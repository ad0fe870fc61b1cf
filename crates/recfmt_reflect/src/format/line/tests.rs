use alloc::string::String;
use alloc::sync::Arc;

use crate::Reflect;
use crate::convert::{ConversionRegistry, ParseTextError, TextValue};
use crate::derive::Reflect;
use crate::format::{
    DecodeOptions, DuplicatePolicy, FormatError, Formatter, LineFormatter, UnknownMemberPolicy,
};
use crate::registry::TypeRegistry;
use crate::resolve::{DescriptorResolver, ResolveError};

#[derive(Reflect, Debug, PartialEq, Clone)]
#[reflect(type_name = "ServiceConfiguration")]
struct ServiceConfiguration {
    #[reflect(name = "ConfigName")]
    config_name: String,
    #[reflect(name = "DatabaseHostName")]
    database_host_name: String,
    #[reflect(name = "ApplicationDataPath")]
    application_data_path: String,
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(type_name = "Primitives")]
struct Primitives {
    flag: bool,
    letter: char,
    tiny: i8,
    small: i16,
    int: i32,
    long: i64,
    huge: i128,
    signed: isize,
    byte: u8,
    short: u16,
    word: u32,
    quad: u64,
    wide: u128,
    size: usize,
    single: f32,
    double: f64,
    text: String,
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(type_name = "Session")]
struct Session {
    user: String,
    #[reflect(transient)]
    token_cache: Vec<u8>,
    attempts: u8,
}

#[derive(Reflect, Debug)]
#[reflect(type_name = "Other")]
struct Other {
    value: u8,
}

#[derive(Debug, PartialEq, Default)]
struct Semver(u16, u16, u16);

impl TextValue for Semver {
    fn to_text(&self) -> String {
        format!("{}.{}.{}", self.0, self.1, self.2)
    }

    fn from_text(text: &str) -> Result<Self, ParseTextError> {
        let mut parts = text.split('.').map(str::parse::<u16>);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(a)), Some(Ok(b)), Some(Ok(c)), None) => Ok(Semver(a, b, c)),
            _ => Err(ParseTextError::new("expected `major.minor.patch`")),
        }
    }
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(type_name = "Package")]
struct Package {
    name: String,
    version: Semver,
}

fn sample() -> ServiceConfiguration {
    ServiceConfiguration {
        config_name: "SomeConfigName".into(),
        database_host_name: "SomeDatabaseHostName".into(),
        application_data_path: "SomeApplicationDataPath".into(),
    }
}

const SAMPLE_TEXT: &str = "@TypeName=ServiceConfiguration\n\
    ConfigName=SomeConfigName\n\
    DatabaseHostName=SomeDatabaseHostName\n\
    ApplicationDataPath=SomeApplicationDataPath\n";

fn formatter() -> LineFormatter {
    let mut types = TypeRegistry::new();
    types.register::<ServiceConfiguration>();
    types.register::<Primitives>();
    types.register::<Session>();
    types.register::<Other>();
    LineFormatter::new(types)
}

#[test]
fn encodes_in_declaration_order() {
    let formatter = formatter();
    assert_eq!(formatter.to_text(&sample()).unwrap(), SAMPLE_TEXT);
    // repeated encodings produce identical bytes
    assert_eq!(formatter.to_text(&sample()).unwrap(), SAMPLE_TEXT);
}

#[test]
fn decodes_sample_record() {
    let formatter = formatter();
    let value: ServiceConfiguration = formatter
        .deserialize_as(&mut SAMPLE_TEXT.as_bytes())
        .unwrap();
    assert_eq!(value, sample());
}

#[test]
fn round_trips_every_primitive() {
    let formatter = formatter();
    let value = Primitives {
        flag: true,
        letter: 'ß',
        tiny: i8::MIN,
        small: -300,
        int: 42,
        long: i64::MAX,
        huge: i128::MIN,
        signed: -1,
        byte: u8::MAX,
        short: 65_000,
        word: 7,
        quad: u64::MAX,
        wide: u128::MAX,
        size: 12_345,
        single: 0.1,
        double: -1.0e-7,
        text: "a = b = c".into(),
    };

    let text = formatter.to_text(&value).unwrap();
    assert!(text.starts_with("@TypeName=Primitives\nflag=true\nletter=ß\n"));
    assert!(text.contains("\ntext=a = b = c\n"));

    let back: Primitives = formatter.deserialize_as(&mut text.as_bytes()).unwrap();
    assert_eq!(back, value);
}

#[test]
fn missing_member_is_named() {
    let formatter = formatter();
    for (name, line) in [
        ("ConfigName", "ConfigName=SomeConfigName\n"),
        ("DatabaseHostName", "DatabaseHostName=SomeDatabaseHostName\n"),
        ("ApplicationDataPath", "ApplicationDataPath=SomeApplicationDataPath\n"),
    ] {
        let text = SAMPLE_TEXT.replace(line, "");
        match formatter.from_text(&text).unwrap_err() {
            FormatError::MissingMember(member) => assert_eq!(member, name),
            other => panic!("unexpected error for `{name}`: {other}"),
        }
    }
}

#[test]
fn unknown_type_is_a_resolution_error() {
    let formatter = formatter();
    let err = formatter.from_text("@TypeName=Unknown\nConfigName=x\n").unwrap_err();
    assert_eq!(err.as_resolve(), Some(&ResolveError::UnknownType("Unknown".into())));
    assert!(err.as_resolve().unwrap().is_type_resolution());

    // the type is resolved before any member line is read
    let err = formatter.from_text("@TypeName=Unknown\nnot a member line\n").unwrap_err();
    assert_eq!(err.as_resolve(), Some(&ResolveError::UnknownType("Unknown".into())));
}

#[test]
fn conversion_failure_names_member_and_text() {
    let formatter = formatter();
    for bad in ["300", "abc", ""] {
        let err = formatter
            .from_text(&format!("@TypeName=Other\nvalue={bad}\n"))
            .unwrap_err();
        match err {
            FormatError::TypeConversion {
                member,
                value_type,
                text,
                ..
            } => {
                assert_eq!(member, "value");
                assert_eq!(value_type, "u8");
                assert_eq!(&*text, bad);
            }
            other => panic!("unexpected error for `{bad}`: {other}"),
        }
    }
}

#[test]
fn transient_members_are_skipped_and_blank() {
    let formatter = formatter();
    let session = Session {
        user: "ana".into(),
        token_cache: vec![1, 2, 3],
        attempts: 2,
    };
    let text = formatter.to_text(&session).unwrap();
    assert_eq!(text, "@TypeName=Session\nuser=ana\nattempts=2\n");

    let back: Session = formatter.deserialize_as(&mut text.as_bytes()).unwrap();
    assert!(back.token_cache.is_empty());
    assert_eq!(back.user, "ana");
    assert_eq!(back.attempts, 2);
}

#[test]
fn crlf_and_blank_lines_are_accepted() {
    let formatter = formatter();
    let text = SAMPLE_TEXT.replace('\n', "\r\n").replace(
        "ConfigName=SomeConfigName\r\n",
        "ConfigName=SomeConfigName\r\n\r\n",
    );
    let value: ServiceConfiguration = formatter.deserialize_as(&mut text.as_bytes()).unwrap();
    assert_eq!(value, sample());
}

#[test]
fn malformed_records() {
    let formatter = formatter();

    let err = formatter.from_text("").unwrap_err();
    assert!(matches!(err, FormatError::MalformedRecord { line: 1, .. }));

    let err = formatter.from_text("TypeName=Other\nvalue=1\n").unwrap_err();
    assert!(matches!(err, FormatError::MalformedRecord { line: 1, .. }));

    let err = formatter.from_text("@TypeName=\nvalue=1\n").unwrap_err();
    assert!(matches!(err, FormatError::MalformedRecord { line: 1, .. }));

    let err = formatter.from_text("@TypeName=Other\n\nvalue 1\n").unwrap_err();
    assert!(matches!(err, FormatError::MalformedRecord { line: 3, .. }));

    let err = formatter.from_text("@TypeName=Other\n=1\n").unwrap_err();
    assert!(matches!(err, FormatError::MalformedRecord { line: 2, .. }));

    // a second header is not an unknown member, even under the ignore policy
    let err = formatter
        .from_text("@TypeName=Other\nvalue=1\n@TypeName=Other\n")
        .unwrap_err();
    assert!(matches!(err, FormatError::MalformedRecord { line: 3, .. }));
}

#[test]
fn duplicate_members_follow_options() {
    let text = "@TypeName=Other\nvalue=1\nvalue=2\n";

    let err = formatter().from_text(text).unwrap_err();
    assert!(matches!(err, FormatError::DuplicateMember(ref name) if &**name == "value"));

    let formatter =
        formatter().with_options(DecodeOptions::new().with_duplicates(DuplicatePolicy::LastWins));
    let value = formatter.from_text(text).unwrap();
    assert_eq!(value.downcast_ref::<Other>().map(|o| o.value), Some(2));
}

#[test]
fn unknown_members_follow_options() {
    let text = "@TypeName=Other\nvalue=1\nlegacy=yes\n";

    let value = formatter().from_text(text).unwrap();
    assert_eq!(value.downcast_ref::<Other>().map(|o| o.value), Some(1));

    let formatter = formatter()
        .with_options(DecodeOptions::new().with_unknown_members(UnknownMemberPolicy::Reject));
    let err = formatter.from_text(text).unwrap_err();
    assert!(matches!(err, FormatError::UnknownMember(ref name) if &**name == "legacy"));
}

#[test]
fn line_breaks_are_rejected_at_encode() {
    let formatter = formatter();
    let mut value = sample();
    value.database_host_name = "db\nhost".into();

    let mut out = Vec::new();
    let err = formatter.serialize(&value, &mut out).unwrap_err();
    assert!(matches!(err, FormatError::Serialization { type_name: "ServiceConfiguration", .. }));
    // lines before the failing member were already written
    assert_eq!(out, b"@TypeName=ServiceConfiguration\nConfigName=SomeConfigName\n");
}

#[test]
fn serialize_as_checks_instance_type() {
    let formatter = formatter();
    let mut out = Vec::new();
    let err = formatter
        .serialize_as(&Other { value: 1 }, "ServiceConfiguration", &mut out)
        .unwrap_err();
    assert!(matches!(err, FormatError::Serialization { .. }));
    assert!(out.is_empty());

    formatter.serialize_as(&sample(), "ServiceConfiguration", &mut out).unwrap();
    assert_eq!(out, SAMPLE_TEXT.as_bytes());
}

#[test]
fn deserialize_as_reports_type_mismatch() {
    let formatter = formatter();
    let err = formatter
        .deserialize_as::<Other>(&mut SAMPLE_TEXT.as_bytes())
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::TypeMismatch { expected: "Other", found: "ServiceConfiguration" }
    ));
}

#[test]
fn unregistered_instance_cannot_be_encoded() {
    let formatter = LineFormatter::new(TypeRegistry::new());
    let err = formatter.to_text(&sample()).unwrap_err();
    assert!(matches!(
        err.as_resolve(),
        Some(ResolveError::UnknownType(name)) if &**name == "ServiceConfiguration"
    ));
}

#[test]
fn custom_conversions() {
    fn types() -> TypeRegistry {
        let mut types = TypeRegistry::new();
        types.register::<Package>();
        types
    }

    let formatter = LineFormatter::new(types());
    let err = formatter
        .to_text(&Package { name: "x".into(), version: Semver(1, 0, 0) })
        .unwrap_err();
    assert!(matches!(
        err.as_resolve(),
        Some(ResolveError::UnsupportedMemberType { member: "version", .. })
    ));

    let mut conversions = ConversionRegistry::new();
    conversions.register::<Semver>();
    let resolver = Arc::new(DescriptorResolver::with_conversions(types(), conversions));
    let formatter = LineFormatter::with_resolver(resolver);

    let package = Package {
        name: "recfmt".into(),
        version: Semver(0, 3, 12),
    };
    let text = formatter.to_text(&package).unwrap();
    assert_eq!(text, "@TypeName=Package\nname=recfmt\nversion=0.3.12\n");

    let back: Package = formatter.deserialize_as(&mut text.as_bytes()).unwrap();
    assert_eq!(back, package);

    let err = formatter
        .from_text("@TypeName=Package\nname=x\nversion=1.2\n")
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::TypeConversion { member: "version", ref source, .. }
            if source.reason() == "expected `major.minor.patch`"
    ));
}

#[test]
fn clones_share_the_descriptor_cache() {
    let formatter = formatter();
    let clone = formatter.clone();
    formatter.to_text(&sample()).unwrap();
    assert_eq!(clone.resolver().cached_len(), 1);
    assert!(Arc::ptr_eq(formatter.resolver(), clone.resolver()));

    let value: Box<dyn Reflect> = clone.from_text(SAMPLE_TEXT).unwrap();
    assert_eq!(value.type_name(), "ServiceConfiguration");
    assert_eq!(clone.resolver().cached_len(), 1);
}
