use alloc::boxed::Box;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ResolveError

/// A record type could not be turned into a [`TypeDescriptor`].
///
/// `UnknownType` and `AmbiguousType` mean the type name itself could not
/// be resolved; see [`is_type_resolution`](Self::is_type_resolution).
///
/// [`TypeDescriptor`]: crate::resolve::TypeDescriptor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("record type `{0}` is not registered")]
    UnknownType(Box<str>),

    #[error("record type name `{0}` is claimed by more than one type")]
    AmbiguousType(Box<str>),

    #[error("record type name {0:?} is empty or contains a line break")]
    InvalidTypeName(&'static str),

    #[error(
        "member `{member}` of `{type_name}` has type `{value_type}`, which has no text conversion"
    )]
    UnsupportedMemberType {
        type_name: &'static str,
        member: &'static str,
        value_type: &'static str,
    },

    #[error("member name {member:?} of `{type_name}` is empty, starts with `@` or contains `=` or a line break")]
    InvalidMemberName {
        type_name: &'static str,
        member: &'static str,
    },

    #[error("member name `{member}` appears more than once in `{type_name}`")]
    DuplicateMemberName {
        type_name: &'static str,
        member: &'static str,
    },
}

impl ResolveError {
    /// Returns `true` for the errors about the type name itself,
    /// [`UnknownType`](Self::UnknownType) and [`AmbiguousType`](Self::AmbiguousType).
    #[inline]
    pub fn is_type_resolution(&self) -> bool {
        matches!(self, Self::UnknownType(_) | Self::AmbiguousType(_))
    }
}
