use core::any::TypeId;

use recfmt_utils::TypeIdMap;
use recfmt_utils::hash::{HashMap, HashSet};

use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of record types, keyed by record type name.
///
/// [Registering] a type generates a new [`TypeMeta`] entry in this store
/// using a type's [`GetTypeMeta`] implementation
/// (which is automatically implemented when using [`#[derive(Reflect)]`](crate::derive::Reflect)).
///
/// Decoders read the type name from a record header and look it up here.
/// A name claimed by two different Rust types is *ambiguous* and no longer
/// resolves to either of them.
///
/// # Example
///
/// ```
/// use recfmt_reflect::{derive::Reflect, registry::TypeRegistry};
///
/// #[derive(Reflect)]
/// #[reflect(type_name = "Endpoint")]
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// let mut registry = TypeRegistry::new();
/// assert!(registry.register::<Endpoint>());
///
/// let meta = registry.get_with_type_name("Endpoint").unwrap();
/// assert_eq!(meta.info().field_len(), 2);
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_name_to_id: HashMap::with_hasher(recfmt_utils::hash::FixedHashState),
            ambiguous_names: HashSet::with_hasher(recfmt_utils::hash::FixedHashState),
        }
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = type_meta.type_name();

        if ambiguous_names.contains(type_name) {
            log::warn!(
                "record type name `{type_name}` is ambiguous, `{}` is not reachable by name",
                type_meta.info().rust_type_name(),
            );
            return;
        }

        if type_name_to_id.remove(type_name).is_some() {
            ambiguous_names.insert(type_name);
            log::warn!(
                "record type name `{type_name}` is claimed by several types and is now ambiguous",
            );
        } else {
            type_name_to_id.insert(type_name, type_meta.type_id());
        }
    }

    /// Try add or do nothing.
    ///
    /// The function will check if `TypeMeta.type_id()` exists.
    /// - If key [`TypeId`] has already exist, the function will do nothing and return `false`.
    /// - If the key [`TypeId`] does not exist, the function will insert value and return `true`.
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.type_meta_table.try_insert(type_meta.type_id(), || {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            type_meta
        })
    }

    /// Attempts to register the type `T` if it has not yet been registered already.
    ///
    /// Returns `true` if `T` was newly registered.
    ///
    /// If the meta for type `T` already exists, it will not be registered again.
    #[inline]
    pub fn register<T: GetTypeMeta>(&mut self) -> bool {
        self.type_meta_table.try_insert(TypeId::of::<T>(), || {
            let meta = T::get_type_meta();
            Self::add_new_type_indices(&meta, &mut self.type_name_to_id, &mut self.ambiguous_names);
            meta
        })
    }

    /// Automatically registers all types annotated with `#[reflect(auto_register)]`.
    ///
    /// This method is equivalent to calling [`register`](Self::register) for each qualifying type.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns the number of types that were newly registered by this call.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it always
    /// does nothing and returns `0`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use recfmt_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect)]
    /// #[reflect(auto_register, type_name = "Job")]
    /// struct Job {
    ///     name: String,
    ///     retries: u8,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.auto_register();
    ///
    /// assert!(registry.contains(TypeId::of::<Job>()));
    /// assert_eq!(registry.auto_register(), 0);
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::__register_types(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            0
        }
    }

    /// Whether the type with given [`TypeId`] has been registered in this registry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Whether the given record type name resolves to exactly one registered type.
    #[inline]
    pub fn contains_type_name(&self, type_name: &str) -> bool {
        self.type_name_to_id.contains_key(type_name)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with
    /// the given [`TypeId`].
    ///
    /// If the specified type has not been registered, returns `None`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with the given record type name.
    ///
    /// If the type name is ambiguous, or if no type with the given name
    /// has been registered, returns `None`.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given record type name is ambiguous, that is,
    /// it matches multiple registered types.
    ///
    /// # Example
    /// ```
    /// # use recfmt_reflect::registry::TypeRegistry;
    /// # mod foo {
    /// #     use recfmt_reflect::derive::Reflect;
    /// #     #[derive(Reflect)]
    /// #     #[reflect(type_name = "MyType")]
    /// #     pub struct MyType;
    /// # }
    /// # mod bar {
    /// #     use recfmt_reflect::derive::Reflect;
    /// #     #[derive(Reflect)]
    /// #     #[reflect(type_name = "MyType")]
    /// #     pub struct MyType;
    /// # }
    /// let mut type_registry = TypeRegistry::default();
    /// type_registry.register::<foo::MyType>();
    /// type_registry.register::<bar::MyType>();
    /// assert_eq!(type_registry.is_ambiguous("MyType"), true);
    /// assert!(type_registry.get_with_type_name("MyType").is_none());
    /// ```
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns an iterator over the [`TypeMeta`]s of the registered types.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.type_meta_table.values().map(TypeMeta::type_name))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::derive::Reflect;
    use crate::info::{FieldInfo, RecordInfo, RecordInfoCell, Typed};
    use crate::registry::{GetTypeMeta, TypeMeta};

    mod alpha {
        use crate::derive::Reflect;

        #[derive(Reflect)]
        #[reflect(type_name = "Shared")]
        pub struct Shared {
            pub a: u8,
        }
    }

    mod beta {
        use crate::derive::Reflect;

        #[derive(Reflect)]
        #[reflect(type_name = "Shared")]
        pub struct Shared {
            pub b: i8,
        }
    }

    #[derive(Reflect)]
    #[reflect(type_name = "Unique")]
    struct Unique {
        value: u64,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Manual {
        count: u32,
    }

    impl Typed for Manual {
        fn record_info() -> &'static RecordInfo {
            fn get(this: &dyn core::any::Any) -> Option<&dyn core::any::Any> {
                this.downcast_ref::<Manual>().map(|m| &m.count as &dyn core::any::Any)
            }
            fn set(
                this: &mut dyn core::any::Any,
                value: Box<dyn core::any::Any>,
            ) -> Result<(), Box<dyn core::any::Any>> {
                let Some(this) = this.downcast_mut::<Manual>() else {
                    return Err(value);
                };
                this.count = *value.downcast::<u32>()?;
                Ok(())
            }

            static CELL: RecordInfoCell = RecordInfoCell::new();
            CELL.get_or_init(|| {
                RecordInfo::new::<Self>("Manual", &[FieldInfo::new::<u32>("Count", get, set)])
            })
        }
    }

    impl GetTypeMeta for Manual {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::of_default::<Self>()
        }
    }

    #[test]
    fn register_once() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register::<Unique>());
        assert!(!registry.register::<Unique>());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TypeId::of::<Unique>()));
        assert!(registry.contains_type_name("Unique"));
        assert_eq!(
            registry.get_with_type_name("Unique").map(TypeMeta::type_id),
            Some(TypeId::of::<Unique>())
        );
    }

    #[test]
    fn shared_name_becomes_ambiguous() {
        let mut registry = TypeRegistry::new();
        registry.register::<alpha::Shared>();
        assert!(registry.get_with_type_name("Shared").is_some());

        registry.register::<beta::Shared>();
        assert!(registry.is_ambiguous("Shared"));
        assert!(registry.get_with_type_name("Shared").is_none());
        assert!(!registry.contains_type_name("Shared"));
        // both are still reachable by `TypeId`
        assert!(registry.get(TypeId::of::<alpha::Shared>()).is_some());
        assert!(registry.get(TypeId::of::<beta::Shared>()).is_some());
    }

    #[test]
    fn manual_impl_uses_default_as_blank() {
        let mut registry = TypeRegistry::new();
        assert!(registry.try_insert_type_meta(Manual::get_type_meta()));
        assert!(!registry.try_insert_type_meta(Manual::get_type_meta()));

        let blank = registry.get_with_type_name("Manual").unwrap().blank();
        assert_eq!(blank.take::<Manual>().unwrap(), Manual::default());
    }

    #[cfg(feature = "auto_register")]
    #[derive(Reflect)]
    #[reflect(type_name = "Submitted", auto_register)]
    struct Submitted {
        id: u16,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_marked_types() {
        let mut registry = TypeRegistry::new();
        assert!(registry.auto_register() >= 1);
        assert!(registry.contains(TypeId::of::<Submitted>()));
        assert!(!registry.contains(TypeId::of::<Unique>()));

        // a second pass finds nothing new
        assert_eq!(registry.auto_register(), 0);
    }
}
