use std::sync::OnceLock;

use crate::info::RecordInfo;

/// Container for static storage of a [`RecordInfo`].
///
/// Internally, there is an [`OnceLock`], almost no additional expenses.
/// Only non-generic types can use it, a `static` inside a generic function
/// is shared by every instantiation.
///
/// ## Example
///
/// ```
/// use core::any::Any;
/// use recfmt_reflect::info::{FieldInfo, RecordInfo, RecordInfoCell, Typed};
///
/// struct Version {
///     major: u32,
/// }
///
/// impl Typed for Version {
///     fn record_info() -> &'static RecordInfo {
///         fn get(this: &dyn Any) -> Option<&dyn Any> {
///             this.downcast_ref::<Version>().map(|v| &v.major as &dyn Any)
///         }
///         fn set(this: &mut dyn Any, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
///             let Some(this) = this.downcast_mut::<Version>() else {
///                 return Err(value);
///             };
///             this.major = *value.downcast::<u32>()?;
///             Ok(())
///         }
///
///         static CELL: RecordInfoCell = RecordInfoCell::new();
///         CELL.get_or_init(|| {
///             RecordInfo::new::<Self>("Version", &[FieldInfo::new::<u32>("Major", get, set)])
///         })
///     }
/// }
///
/// assert_eq!(Version::record_info().type_name(), "Version");
/// assert_eq!(Version::record_info().field_at(0).unwrap().name(), "Major");
/// ```
pub struct RecordInfoCell(OnceLock<RecordInfo>);

impl RecordInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the [`RecordInfo`] stored in the cell.
    ///
    /// If the cell is empty, the info is generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &RecordInfo
    where
        F: FnOnce() -> RecordInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for RecordInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
