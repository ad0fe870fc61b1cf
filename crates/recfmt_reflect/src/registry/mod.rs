//! Provide the type registry used to find a record type by its name.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: A container including a [`RecordInfo`] and a blank constructor.
//! - [`GetTypeMeta`]: A trait provide a function to create a `TypeMeta` from a type.
//! - [`TypeRegistry`]: A container for storing and querying `TypeMeta`s.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! On unsupported platforms nothing is registered and no error is raised.
//!
//! [`RecordInfo`]: crate::info::RecordInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
