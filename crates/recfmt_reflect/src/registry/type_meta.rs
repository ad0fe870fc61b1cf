use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{RecordInfo, Typed};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime storage for type metadata, registered into the [`TypeRegistry`].
///
/// This includes the [`RecordInfo`] and a constructor for blank instances,
/// which the decoders fill member by member.
///
/// An instance of `TypeMeta` is usually generated by
/// [`#[derive(Reflect)]`](crate::derive::Reflect) through [`GetTypeMeta`].
/// The derived blank constructor builds the struct literal from
/// `Default::default()` of every field and never calls the type's own
/// constructors or `Default` impl.
///
/// # Example
///
/// ```
/// use recfmt_reflect::{derive::Reflect, registry::{GetTypeMeta, TypeMeta}};
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Limits {
///     max: u32,
/// }
///
/// let meta: TypeMeta = Limits::get_type_meta();
/// let blank = meta.blank().take::<Limits>().unwrap();
///
/// assert_eq!(blank, Limits { max: 0 });
/// ```
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
#[derive(Clone, Copy)]
pub struct TypeMeta {
    info: &'static RecordInfo,
    blank: fn() -> Box<dyn Reflect>,
}

impl TypeMeta {
    /// Create a [`TypeMeta`] from a record info and a blank constructor.
    #[inline]
    pub const fn new(info: &'static RecordInfo, blank: fn() -> Box<dyn Reflect>) -> Self {
        Self { info, blank }
    }

    /// Create a [`TypeMeta`] whose blank instance is `T::default()`.
    ///
    /// Useful for hand-written [`Typed`] implementations.
    #[inline]
    pub fn of_default<T: Typed + Default>() -> Self {
        fn blank<T: Typed + Default>() -> Box<dyn Reflect> {
            Box::new(T::default())
        }

        Self::new(T::record_info(), blank::<T>)
    }

    /// Returns the [`RecordInfo`] of the type.
    #[inline]
    pub const fn info(&self) -> &'static RecordInfo {
        self.info
    }

    /// Returns the record type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.info.type_name()
    }

    /// Returns the [`TypeId`] of the type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.info.type_id()
    }

    /// Allocates a blank instance, ready to be populated.
    #[inline]
    pub fn blank(&self) -> Box<dyn Reflect> {
        (self.blank)()
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_name", &self.info.type_name())
            .field("rust_type", &self.info.rust_type_name())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// A trait which allows a type to generate its [`TypeMeta`]
/// for registration into the [`TypeRegistry`].
///
/// This trait is automatically implemented for items using
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub trait GetTypeMeta: Typed {
    /// Returns the **default** [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;
}
