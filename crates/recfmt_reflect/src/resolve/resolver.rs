use alloc::boxed::Box;
use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use recfmt_utils::hash::HashMap;

use crate::convert::ConversionRegistry;
use crate::registry::TypeRegistry;
use crate::resolve::{ResolveError, TypeDescriptor};

// -----------------------------------------------------------------------------
// DescriptorResolver

/// Resolves record type names to cached [`TypeDescriptor`]s.
///
/// The first resolution of a name introspects the registered type, validates
/// its members against the [`ConversionRegistry`] and caches the result.
/// Later resolutions return the same `Arc` without introspecting again.
/// Failures are returned to the caller and not cached.
///
/// The cache is guarded by a [`RwLock`]: lookups share the lock, a miss takes
/// it exclusively and checks again before building, so concurrent callers of
/// a new name all observe one descriptor.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use recfmt_reflect::derive::Reflect;
/// use recfmt_reflect::registry::TypeRegistry;
/// use recfmt_reflect::resolve::{DescriptorResolver, ResolveError};
///
/// #[derive(Reflect)]
/// #[reflect(type_name = "Mailbox")]
/// struct Mailbox {
///     #[reflect(name = "Address")]
///     address: String,
///     #[reflect(name = "Quota")]
///     quota: u64,
/// }
///
/// let mut types = TypeRegistry::new();
/// types.register::<Mailbox>();
/// let resolver = DescriptorResolver::new(types);
///
/// let first = resolver.resolve("Mailbox").unwrap();
/// let names: Vec<_> = first.members().iter().map(|m| m.name()).collect();
/// assert_eq!(names, ["Address", "Quota"]);
///
/// assert!(Arc::ptr_eq(&first, &resolver.resolve("Mailbox").unwrap()));
/// assert_eq!(
///     resolver.resolve("Outbox").unwrap_err(),
///     ResolveError::UnknownType("Outbox".into()),
/// );
/// ```
pub struct DescriptorResolver {
    types: TypeRegistry,
    conversions: ConversionRegistry,
    cache: RwLock<HashMap<&'static str, Arc<TypeDescriptor>>>,
}

impl DescriptorResolver {
    /// Creates a resolver over `types` with the default conversions.
    #[inline]
    pub fn new(types: TypeRegistry) -> Self {
        Self::with_conversions(types, ConversionRegistry::new())
    }

    /// Creates a resolver over `types` with a custom conversion registry.
    #[inline]
    pub fn with_conversions(types: TypeRegistry, conversions: ConversionRegistry) -> Self {
        Self {
            types,
            conversions,
            cache: RwLock::new(HashMap::default()),
        }
    }

    /// Returns the type registry.
    #[inline]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Returns the conversion registry.
    #[inline]
    pub fn conversions(&self) -> &ConversionRegistry {
        &self.conversions
    }

    /// Returns the number of cached descriptors.
    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns the descriptor of the record type named `type_name`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownType`] if no registered type has that name.
    /// - [`ResolveError::AmbiguousType`] if several registered types share it.
    /// - [`ResolveError::UnsupportedMemberType`] if a non-transient member's
    ///   type has no text conversion.
    /// - [`ResolveError::InvalidMemberName`], [`ResolveError::DuplicateMemberName`]
    ///   and [`ResolveError::InvalidTypeName`] for names a record cannot carry.
    pub fn resolve(&self, type_name: &str) -> Result<Arc<TypeDescriptor>, ResolveError> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(descriptor) = cache.get(type_name) {
            log::trace!("descriptor cache hit for `{type_name}`");
            return Ok(Arc::clone(descriptor));
        }
        drop(cache);

        let Some(meta) = self.types.get_with_type_name(type_name) else {
            return Err(if self.types.is_ambiguous(type_name) {
                ResolveError::AmbiguousType(Box::from(type_name))
            } else {
                ResolveError::UnknownType(Box::from(type_name))
            });
        };

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have built it while the lock was released.
        if let Some(descriptor) = cache.get(type_name) {
            return Ok(Arc::clone(descriptor));
        }

        let descriptor = Arc::new(TypeDescriptor::build(meta, &self.conversions)?);
        log::debug!(
            "built descriptor for `{}` with {} member(s)",
            descriptor.type_name(),
            descriptor.len(),
        );
        cache.insert(descriptor.type_name(), Arc::clone(&descriptor));
        Ok(descriptor)
    }
}

impl core::fmt::Debug for DescriptorResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DescriptorResolver")
            .field("types", &self.types)
            .field("conversions", &self.conversions.len())
            .field("cached", &self.cached_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
