//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `Typed`: a static `RecordInfo` listing every field in declaration order,
///   with type-erased accessors.
/// - `GetTypeMeta`: a `TypeMeta` whose blank constructor builds the struct
///   literal from `Default::default()` of every field.
///
/// `Reflect` itself is then provided by a blanket implementation.
///
/// Generic types, tuple structs, enums and unions are rejected.
///
/// ## Type attributes
///
/// ### Record type name
///
/// The name written into the `@TypeName` header. Defaults to
/// `concat!(module_path!(), "::", "Ident")`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_name = "ServiceConfiguration")]
/// struct ServiceConfiguration { /* ... */ }
/// ```
///
/// The name must not be empty or contain a line break.
///
/// ### Auto register
///
/// Submits the type for `TypeRegistry::auto_register`. Does nothing unless
/// the `auto_register` feature is enabled.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(auto_register)]
/// struct Foo { /* ... */ }
/// ```
///
/// ## Field attributes
///
/// ### Member name
///
/// The name used in records. Defaults to the field identifier without `r#`.
/// It must not be empty, start with `@`, or contain `=` or a line break.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(name = "ConfigName")]
///     config_name: String,
/// }
/// ```
///
/// ### Transient
///
/// The field stays in `RecordInfo` but no formatter writes or reads it.
/// Decoded values hold `Default::default()` there.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(transient)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Every field type, transient or not, must implement `Default`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
}
