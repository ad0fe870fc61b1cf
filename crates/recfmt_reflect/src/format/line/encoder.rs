use alloc::format;
use std::io::Write;

use crate::Reflect;
use crate::format::record::{check_instance, member_text};
use crate::format::{DELIMITER, FormatError, TYPE_NAME_KEY};
use crate::resolve::TypeDescriptor;

/// Writes the header and then one line per member, in descriptor order.
///
/// Lines go straight to `writer`, a failure leaves the lines before it.
pub(super) fn write_record(
    descriptor: &TypeDescriptor,
    value: &dyn Reflect,
    writer: &mut dyn Write,
) -> Result<(), FormatError> {
    check_instance(descriptor, value)?;

    writeln!(writer, "{TYPE_NAME_KEY}{DELIMITER}{}", descriptor.type_name())?;

    for member in descriptor.members() {
        let text = member_text(descriptor, member, value)?;
        if text.contains(['\n', '\r']) {
            return Err(FormatError::Serialization {
                type_name: descriptor.type_name(),
                reason: format!("member `{}` contains a line break", member.name()),
            });
        }
        writeln!(writer, "{}{DELIMITER}{text}", member.name())?;
    }

    Ok(())
}
