//! Provide compile-time record information.
//!
//! ## Menu
//!
//! - [`RecordInfo`]: The describe-yourself table of a record type: its record
//!   type name, its [`TypeId`] and its fields in declaration order.
//! - [`FieldInfo`]: One field: the member name, the declared value type,
//!   a transient flag and a pair of type-erased accessor functions.
//! - [`RecordInfoCell`]: Static storage used by [`Typed`] implementations.
//! - [`Typed`]: A trait for obtaining the `RecordInfo` of a type.
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod field_info;
mod record_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use cell::RecordInfoCell;
pub use field_info::{FieldGetter, FieldInfo, FieldSetter};
pub use record_info::RecordInfo;
pub use typed::{DynamicTyped, Typed};
