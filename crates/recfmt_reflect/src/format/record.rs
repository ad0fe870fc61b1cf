//! Steps shared by every formatter: reading member texts out of an instance
//! and populating a blank instance from parsed member texts.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::any::Any;

use recfmt_utils::hash::HashMap;
use recfmt_utils::hash::hash_map::Entry;

use crate::Reflect;
use crate::format::{DecodeOptions, DuplicatePolicy, FormatError, UnknownMemberPolicy};
use crate::resolve::{MemberDescriptor, TypeDescriptor};

// -----------------------------------------------------------------------------
// Encode

/// Fails unless `value` is an instance of the described type.
pub(crate) fn check_instance(
    descriptor: &TypeDescriptor,
    value: &dyn Reflect,
) -> Result<(), FormatError> {
    if value.ty_id() == descriptor.type_id() {
        Ok(())
    } else {
        Err(FormatError::Serialization {
            type_name: descriptor.type_name(),
            reason: format!(
                "instance is a `{}`",
                value.reflect_record_info().rust_type_name()
            ),
        })
    }
}

/// Reads one member of `value` and converts it to text.
pub(crate) fn member_text(
    descriptor: &TypeDescriptor,
    member: &MemberDescriptor,
    value: &dyn Reflect,
) -> Result<String, FormatError> {
    let record: &dyn Any = value;
    member
        .read_text(record)
        .ok_or_else(|| FormatError::Serialization {
            type_name: descriptor.type_name(),
            reason: format!("member `{}` could not be read", member.name()),
        })
}

// -----------------------------------------------------------------------------
// Decode

/// Allocates a blank instance of the described type and populates it.
pub(crate) fn materialize(
    descriptor: &TypeDescriptor,
    members: &[(String, String)],
    options: &DecodeOptions,
) -> Result<Box<dyn Reflect>, FormatError> {
    let mut instance = descriptor.blank();
    populate(descriptor, &mut *instance, members, options)?;
    Ok(instance)
}

/// Writes every member of `descriptor` into `instance`.
///
/// The instance must be discarded if this fails, some members may already
/// have been written.
pub(crate) fn populate(
    descriptor: &TypeDescriptor,
    instance: &mut dyn Reflect,
    members: &[(String, String)],
    options: &DecodeOptions,
) -> Result<(), FormatError> {
    let mut texts: HashMap<&str, &str> =
        HashMap::with_capacity_and_hasher(members.len(), Default::default());

    for (name, text) in members {
        if descriptor.member(name).is_none() {
            match options.unknown_members {
                UnknownMemberPolicy::Ignore => {
                    log::warn!(
                        "ignoring member `{name}`, `{}` does not declare it",
                        descriptor.type_name()
                    );
                    continue;
                }
                UnknownMemberPolicy::Reject => {
                    return Err(FormatError::UnknownMember(name.as_str().into()));
                }
            }
        }

        match texts.entry(name.as_str()) {
            Entry::Vacant(entry) => {
                entry.insert(text.as_str());
            }
            Entry::Occupied(mut entry) => match options.duplicates {
                DuplicatePolicy::LastWins => {
                    entry.insert(text.as_str());
                }
                DuplicatePolicy::Reject => {
                    return Err(FormatError::DuplicateMember(name.as_str().into()));
                }
            },
        }
    }

    for member in descriptor.members() {
        let Some(&text) = texts.get(member.name()) else {
            return Err(FormatError::MissingMember(member.name()));
        };

        let value = member
            .parse(text)
            .map_err(|source| FormatError::TypeConversion {
                member: member.name(),
                value_type: member.value_type_name(),
                text: text.into(),
                source,
            })?;

        let record: &mut dyn Any = &mut *instance;
        if !member.write(record, value) {
            return Err(FormatError::TypeMismatch {
                expected: descriptor.type_name(),
                found: instance.type_name(),
            });
        }
    }

    Ok(())
}
