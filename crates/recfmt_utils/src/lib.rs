//! Shared containers for the `recfmt` crates.
//!
//! - [`hash`]: `hashbrown` containers with a fixed `foldhash` seed.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
