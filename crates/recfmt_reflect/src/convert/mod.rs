//! Conversions between member values and their textual form.
//!
//! ## Menu
//!
//! - [`TextValue`]: A value type that round-trips through text.
//! - [`ParseTextError`]: Returned when a text cannot be parsed into a value.
//! - [`Conversion`]: The type-erased pair of conversion functions of one type.
//! - [`ConversionRegistry`]: The set of value types members may declare.
//!
//! ## Default types
//!
//! - `bool` `char` `f32` `f64`
//! - `i8` `i16` `i32` `i64` `i128` `isize`
//! - `u8` `u16` `u32` `u64` `u128` `usize`
//! - `String`

// -----------------------------------------------------------------------------
// Modules

mod conversion;
mod registry;
mod text_value;

// -----------------------------------------------------------------------------
// Exports

pub use conversion::Conversion;
pub use registry::ConversionRegistry;
pub use text_value::{ParseTextError, TextValue};
