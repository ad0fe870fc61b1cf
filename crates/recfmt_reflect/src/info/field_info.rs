use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// Accessors

/// Reads one field out of a type-erased record.
///
/// Returns `None` when the record is not of the type the field belongs to.
pub type FieldGetter = for<'a> fn(&'a dyn Any) -> Option<&'a dyn Any>;

/// Writes one field of a type-erased record.
///
/// Hands the value back when the record is not of the owning type or the
/// value is not of the declared field type.
pub type FieldSetter = fn(&mut dyn Any, Box<dyn Any>) -> Result<(), Box<dyn Any>>;

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a single record field.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(name = "FieldA")]
///     field_a: f32,
/// }
///
/// let field = Foo::record_info().field_at(0).unwrap();
///
/// assert!(field.type_is::<f32>());
/// assert_eq!(field.name(), "FieldA");
/// assert!(!field.is_transient());
/// ```
#[derive(Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    ty_id: TypeId,
    value_type_name: &'static str,
    transient: bool,
    getter: FieldGetter,
    setter: FieldSetter,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the member `name` with value type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str, getter: FieldGetter, setter: FieldSetter) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            value_type_name: core::any::type_name::<T>(),
            transient: false,
            getter,
            setter,
        }
    }

    /// Marks the field as transient, a transient field is never encoded.
    #[inline]
    pub const fn with_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the declared value type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the declared value type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the Rust name of the declared value type, for diagnostics.
    #[inline]
    pub const fn value_type_name(&self) -> &'static str {
        self.value_type_name
    }

    /// Returns `true` if the field is skipped by every formatter.
    #[inline]
    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    /// Reads the field from `record`.
    #[inline]
    pub fn get<'a>(&self, record: &'a dyn Any) -> Option<&'a dyn Any> {
        (self.getter)(record)
    }

    /// Writes `value` into the field of `record`.
    #[inline]
    pub fn set(&self, record: &mut dyn Any, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        (self.setter)(record, value)
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("value_type", &self.value_type_name)
            .field("transient", &self.transient)
            .finish_non_exhaustive()
    }
}
