use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use crate::convert::{ParseTextError, TextValue};

/// The type-erased conversion functions of one [`TextValue`] type.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::convert::Conversion;
///
/// let conversion = Conversion::of::<u16>();
///
/// assert_eq!(conversion.to_text(&8080_u16).as_deref(), Some("8080"));
/// assert_eq!(conversion.to_text(&8080_u32), None);
///
/// let value = conversion.from_text("443").unwrap();
/// assert_eq!(value.downcast_ref::<u16>(), Some(&443));
/// ```
#[derive(Clone, Copy)]
pub struct Conversion {
    type_id: TypeId,
    type_name: &'static str,
    to_text: fn(&dyn Any) -> Option<String>,
    from_text: fn(&str) -> Result<Box<dyn Any>, ParseTextError>,
}

impl Conversion {
    /// Creates the conversion of `T`.
    pub fn of<T: TextValue>() -> Self {
        fn to_text<T: TextValue>(value: &dyn Any) -> Option<String> {
            value.downcast_ref::<T>().map(T::to_text)
        }

        fn from_text<T: TextValue>(text: &str) -> Result<Box<dyn Any>, ParseTextError> {
            T::from_text(text).map(|value| Box::new(value) as Box<dyn Any>)
        }

        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
            to_text: to_text::<T>,
            from_text: from_text::<T>,
        }
    }

    /// Returns the `TypeId` of the converted type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the Rust name of the converted type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Converts `value` to text, `None` if it is not of the converted type.
    #[inline]
    pub fn to_text(&self, value: &dyn Any) -> Option<String> {
        (self.to_text)(value)
    }

    /// Parses `text` into a boxed value of the converted type.
    #[inline]
    pub fn from_text(&self, text: &str) -> Result<Box<dyn Any>, ParseTextError> {
        (self.from_text)(text)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Conversion").field(&self.type_name).finish()
    }
}
