//! Turn record types into cached, validated type descriptors.
//!
//! ## Menu
//!
//! - [`TypeDescriptor`]: The serializable shape of one record type, its members
//!   in declaration order with transient fields removed.
//! - [`MemberDescriptor`]: One serializable member, its field accessors paired
//!   with the text conversion of its value type.
//! - [`DescriptorResolver`]: Owns the type registry, the conversion registry and
//!   the descriptor cache. Shared by formatters through an `Arc`.
//! - [`ResolveError`]: Why a record type could not be resolved.

// -----------------------------------------------------------------------------
// Modules

mod descriptor;
mod error;
mod resolver;

// -----------------------------------------------------------------------------
// Exports

pub use descriptor::{MemberDescriptor, TypeDescriptor};
pub use error::ResolveError;
pub use resolver::DescriptorResolver;
