use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use recfmt_utils::hash::HashMap;
use recfmt_utils::hash::hash_map::Entry;

use crate::Reflect;
use crate::convert::{Conversion, ConversionRegistry, ParseTextError};
use crate::info::FieldInfo;
use crate::registry::TypeMeta;
use crate::resolve::ResolveError;

// -----------------------------------------------------------------------------
// MemberDescriptor

/// One serializable member of a record type.
#[derive(Clone, Copy, Debug)]
pub struct MemberDescriptor {
    field: FieldInfo,
    conversion: Conversion,
}

impl MemberDescriptor {
    /// Returns the member name, as written in a record.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Returns the Rust name of the declared value type.
    #[inline]
    pub const fn value_type_name(&self) -> &'static str {
        self.field.value_type_name()
    }

    /// Returns the underlying [`FieldInfo`].
    #[inline]
    pub const fn field(&self) -> &FieldInfo {
        &self.field
    }

    /// Reads the member out of `record` and converts it to text.
    ///
    /// Returns `None` if `record` is not of the described type.
    #[inline]
    pub fn read_text(&self, record: &dyn Any) -> Option<String> {
        self.conversion.to_text(self.field.get(record)?)
    }

    /// Parses `text` into a boxed value of the declared type.
    #[inline]
    pub fn parse(&self, text: &str) -> Result<Box<dyn Any>, ParseTextError> {
        self.conversion.from_text(text)
    }

    /// Writes a value produced by [`parse`](Self::parse) into `record`.
    ///
    /// Returns `false` if `record` is not of the described type.
    #[inline]
    pub fn write(&self, record: &mut dyn Any, value: Box<dyn Any>) -> bool {
        self.field.set(record, value).is_ok()
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The serializable shape of one record type.
///
/// Members are kept in declaration order, which is the order every formatter
/// writes them in. A descriptor is immutable once built.
#[derive(Debug)]
pub struct TypeDescriptor {
    meta: TypeMeta,
    members: Box<[MemberDescriptor]>,
    indices: HashMap<&'static str, usize>,
}

impl TypeDescriptor {
    pub(crate) fn build(
        meta: &TypeMeta,
        conversions: &ConversionRegistry,
    ) -> Result<Self, ResolveError> {
        let info = meta.info();
        let type_name = info.type_name();

        if type_name.is_empty() || type_name.contains(['\n', '\r']) {
            return Err(ResolveError::InvalidTypeName(type_name));
        }

        let mut indices: HashMap<&'static str, usize> =
            HashMap::with_capacity_and_hasher(info.field_len(), Default::default());
        let mut members = Vec::with_capacity(info.field_len());

        for field in info.iter().filter(|field| !field.is_transient()) {
            let member = field.name();

            if !is_valid_member_name(member) {
                return Err(ResolveError::InvalidMemberName { type_name, member });
            }
            match indices.entry(member) {
                Entry::Vacant(entry) => {
                    entry.insert(members.len());
                }
                Entry::Occupied(_) => {
                    return Err(ResolveError::DuplicateMemberName { type_name, member });
                }
            }

            let Some(conversion) = conversions.get(field.ty_id()) else {
                return Err(ResolveError::UnsupportedMemberType {
                    type_name,
                    member,
                    value_type: field.value_type_name(),
                });
            };

            members.push(MemberDescriptor {
                field: *field,
                conversion: *conversion,
            });
        }

        Ok(Self {
            meta: *meta,
            members: members.into_boxed_slice(),
            indices,
        })
    }

    /// Returns the record type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.meta.type_name()
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.meta.type_id()
    }

    /// Returns the members in declaration order.
    #[inline]
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Returns the member with the given name, if present.
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.get(*self.indices.get(name)?)
    }

    /// Returns the number of serializable members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the record has no serializable member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Allocates a blank instance of the described type.
    #[inline]
    pub fn blank(&self) -> Box<dyn Reflect> {
        self.meta.blank()
    }
}

fn is_valid_member_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('@') && !name.contains(['=', '\n', '\r'])
}
