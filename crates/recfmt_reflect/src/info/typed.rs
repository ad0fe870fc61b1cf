use core::any::Any;

use crate::info::RecordInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time record information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to the describe-yourself table without an instance of the type.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::{derive::Reflect, info::{RecordInfo, Typed}};
///
/// #[derive(Reflect)]
/// #[reflect(type_name = "Account")]
/// struct Account {
///     #[reflect(name = "Owner")]
///     owner: String,
///     balance: i64,
/// }
///
/// let info: &'static RecordInfo = <Account as Typed>::record_info();
///
/// assert_eq!(info.type_name(), "Account");
/// assert_eq!(info.field_at(1).map(|f| f.name()), Some("balance"));
/// ```
///
/// Manual implementations store the info in a [`RecordInfoCell`].
///
/// [`RecordInfoCell`]: crate::info::RecordInfoCell
pub trait Typed: Any + Send + Sync {
    /// A static accessor to compile-time record information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn record_info() -> &'static RecordInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Provide dynamic dispatch for types that implement [`Typed`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use recfmt_reflect::{derive::Reflect, Reflect, info::DynamicTyped};
    /// #[derive(Reflect)]
    /// struct A {
    ///     value: u64,
    /// }
    ///
    /// let a = Box::new(A { value: 1 }) as Box<dyn Reflect>;
    /// assert_eq!(a.reflect_record_info().field_len(), 1);
    /// ```
    fn reflect_record_info(&self) -> &'static RecordInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_record_info(&self) -> &'static RecordInfo {
        Self::record_info()
    }
}
