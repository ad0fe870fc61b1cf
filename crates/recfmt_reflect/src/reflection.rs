use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{DynamicTyped, Typed};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose members can be read and written through its [`RecordInfo`].
///
/// Implemented for every [`Typed`] type, so `#[derive(Reflect)]` only needs to
/// provide `Typed` and [`GetTypeMeta`]. Formatters take `&dyn Reflect` on the
/// way out and hand back `Box<dyn Reflect>` on the way in.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let value: Box<dyn Reflect> = Box::new(Point { x: 1, y: 2 });
/// assert!(value.is::<Point>());
/// assert_eq!(value.downcast_ref::<Point>().map(|p| p.y), Some(2));
/// ```
///
/// [`RecordInfo`]: crate::info::RecordInfo
/// [`GetTypeMeta`]: crate::registry::GetTypeMeta
pub trait Reflect: DynamicTyped + Send + Sync + Any {}

impl<T: Typed> Reflect for T {}

impl dyn Reflect {
    /// Returns the record type name of the underlying value.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.reflect_record_info().type_name()
    }

    /// Returns the [`TypeId`] of the underlying value.
    ///
    /// `Any::type_id` on a `Box<dyn Reflect>` returns the id of the box,
    /// use this instead.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        let any: &dyn Any = self;
        any.type_id()
    }

    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            match any.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(_) => unreachable!("type is already checked"),
            }
        } else {
            Err(self)
        }
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.type_name())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(type_name = "tests::Sample")]
    struct Sample {
        id: u32,
    }

    #[derive(Reflect, Debug)]
    struct Other {}

    #[test]
    fn take_and_downcast() {
        let boxed: Box<dyn Reflect> = Box::new(Sample { id: 7 });
        assert_eq!(boxed.type_name(), "tests::Sample");
        assert!(boxed.is::<Sample>());
        assert!(!boxed.is::<Other>());

        let boxed = boxed.take::<Other>().unwrap_err();
        assert_eq!(boxed.take::<Sample>().unwrap(), Sample { id: 7 });
    }

    #[test]
    fn downcast_mut_writes_through() {
        let mut boxed: Box<dyn Reflect> = Box::new(Sample { id: 1 });
        boxed.downcast_mut::<Sample>().unwrap().id = 9;
        assert_eq!(boxed.downcast_ref::<Sample>(), Some(&Sample { id: 9 }));
        assert_eq!(format!("{:?}", &*boxed), "Reflect(tests::Sample)");
    }
}
