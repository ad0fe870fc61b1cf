use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::FieldInfo;

/// A container for compile-time record info.
///
/// # Examples
///
/// ```rust
/// use recfmt_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(type_name = "Sample")]
/// struct A {
///     val: f32,
/// }
///
/// let info = <A as Typed>::record_info();
///
/// assert_eq!(info.type_name(), "Sample");
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.field_at(0).map(|f| f.name()), Some("val"));
/// ```
#[derive(Clone, Debug)]
pub struct RecordInfo {
    type_id: TypeId,
    type_name: &'static str,
    rust_type_name: &'static str,
    fields: Box<[FieldInfo]>,
}

impl RecordInfo {
    /// Create a new [`RecordInfo`] for `T`, identified by `type_name`.
    ///
    /// The order of internal fields is fixed, depends on the input order.
    /// Names are not checked here, duplicates surface when the type is resolved.
    pub fn new<T: Any>(type_name: &'static str, fields: &[FieldInfo]) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name,
            rust_type_name: core::any::type_name::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the record type name, the identity written into the header.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the Rust type name of the described type, for diagnostics.
    #[inline]
    pub const fn rust_type_name(&self) -> &'static str {
        self.rust_type_name
    }

    /// Check if the given type matches the described one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::info::Typed;

    #[derive(Reflect)]
    #[reflect(type_name = "tests::Layout")]
    struct Layout {
        #[reflect(name = "Width")]
        width: u32,
        #[reflect(transient)]
        scratch: u64,
        r#type: String,
    }

    #[test]
    fn declaration_order_and_names() {
        let info = Layout::record_info();
        let names: Vec<_> = info.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Width", "scratch", "type"]);
        assert!(info.field_at(2).unwrap().type_is::<String>());
        assert!(info.field_at(3).is_none());
        assert!(info.type_is::<Layout>());
        assert!(info.rust_type_name().ends_with("Layout"));
    }

    #[test]
    fn transient_flag_and_accessors() {
        let info = Layout::record_info();
        assert!(info.field_at(1).unwrap().is_transient());
        assert!(!info.field_at(0).unwrap().is_transient());

        let mut layout = Layout {
            width: 3,
            scratch: 0,
            r#type: String::from("grid"),
        };
        let width = info.field_at(0).unwrap();
        assert_eq!(width.get(&layout).unwrap().downcast_ref::<u32>(), Some(&3));

        width.set(&mut layout, Box::new(8_u32)).unwrap();
        assert_eq!(layout.width, 8);

        // wrong value type is handed back untouched
        let rejected = width.set(&mut layout, Box::new("8")).unwrap_err();
        assert!(rejected.is::<&str>());
        assert_eq!(layout.width, 8);

        // wrong record type
        assert!(width.get(&5_u8).is_none());
    }
}
