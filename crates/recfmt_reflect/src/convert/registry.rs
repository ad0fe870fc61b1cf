use alloc::string::String;
use core::any::TypeId;

use recfmt_utils::TypeIdMap;

use crate::convert::{Conversion, TextValue};

/// The set of value types that members are allowed to declare.
///
/// A member whose declared type has no entry here makes the resolution of
/// its record type fail.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use recfmt_reflect::convert::ConversionRegistry;
///
/// let registry = ConversionRegistry::new();
/// assert!(registry.contains(TypeId::of::<i32>()));
/// assert!(!registry.contains(TypeId::of::<Vec<i32>>()));
///
/// let empty = ConversionRegistry::empty();
/// assert!(empty.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ConversionRegistry {
    table: TypeIdMap<Conversion>,
}

impl Default for ConversionRegistry {
    /// See [`ConversionRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionRegistry {
    /// Create a registry without any conversion.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            table: TypeIdMap::new(),
        }
    }

    /// Create a registry with the default conversions.
    ///
    /// - `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    /// Adds the conversion of `T`.
    ///
    /// Returns `false` and keeps the existing entry if `T` is already present.
    #[inline]
    pub fn register<T: TextValue>(&mut self) -> bool {
        self.table.try_insert(TypeId::of::<T>(), Conversion::of::<T>)
    }

    /// Returns the conversion of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&Conversion> {
        self.table.get(&type_id)
    }

    /// Whether the type with given [`TypeId`] is convertible.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.table.contains(&type_id)
    }

    /// Returns the number of convertible types.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no type is convertible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns an iterator over the conversions, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Conversion> {
        self.table.values()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::ConversionRegistry;
    use crate::convert::{ParseTextError, TextValue};

    #[derive(Debug, PartialEq)]
    struct Flag(bool);

    impl TextValue for Flag {
        fn to_text(&self) -> String {
            String::from(if self.0 { "yes" } else { "no" })
        }

        fn from_text(text: &str) -> Result<Self, ParseTextError> {
            match text {
                "yes" => Ok(Flag(true)),
                "no" => Ok(Flag(false)),
                _ => Err(ParseTextError::new("expected `yes` or `no`")),
            }
        }
    }

    #[test]
    fn defaults_cover_primitives() {
        let registry = ConversionRegistry::new();
        assert_eq!(registry.len(), 17);
        assert!(registry.contains(TypeId::of::<char>()));
        assert!(registry.contains(TypeId::of::<String>()));
        assert!(!registry.contains(TypeId::of::<&'static str>()));
        assert!(!registry.contains(TypeId::of::<()>()));
    }

    #[test]
    fn register_custom_type() {
        let mut registry = ConversionRegistry::new();
        assert!(registry.register::<Flag>());
        assert!(!registry.register::<Flag>());
        assert!(!registry.register::<u8>());

        let conversion = registry.get(TypeId::of::<Flag>()).unwrap();
        assert_eq!(conversion.to_text(&Flag(true)).as_deref(), Some("yes"));
        let value = conversion.from_text("no").unwrap();
        assert_eq!(value.downcast_ref::<Flag>(), Some(&Flag(false)));
        assert_eq!(
            conversion.from_text("maybe").unwrap_err().reason(),
            "expected `yes` or `no`"
        );
    }
}
