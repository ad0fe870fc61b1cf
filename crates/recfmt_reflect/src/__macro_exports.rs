//! Items used by the code `#[derive(Reflect)]` generates.

pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function submitted for one `#[reflect(auto_register)]` type.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry) -> bool);

    inventory::collect!(__AutoRegisterFunc);

    /// Gives the derive a plain function pointer to `TypeRegistry::register::<T>`.
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry) -> bool;
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) -> bool {
            registry.register::<T>()
        }
    }

    /// Runs every submitted registration, returns how many types were new.
    pub fn __register_types(registry: &mut TypeRegistry) -> usize {
        inventory::iter::<__AutoRegisterFunc>
            .into_iter()
            .filter(|func| (func.0)(registry))
            .count()
    }
}
