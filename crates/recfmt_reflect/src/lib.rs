#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output refers to `::recfmt_reflect`, which must also resolve inside
// this crate's own tests.
extern crate self as recfmt_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod convert;
pub mod format;
pub mod info;
pub mod registry;
pub mod resolve;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use recfmt_reflect_derive as derive;
