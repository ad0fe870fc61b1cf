use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Formatter};

use serde_core::de::{Error, MapAccess, Unexpected, Visitor};

use crate::format::TYPE_NAME_KEY;

/// A JSON record before its type is resolved.
#[derive(Debug, Default)]
pub(super) struct RawRecord {
    pub type_name: String,
    /// `(name, text)` in document order, duplicates included.
    pub members: Vec<(String, String)>,
}

/// A [`Visitor`] collecting the header and the member texts of one object.
pub(super) struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = RawRecord;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a record object with a `@TypeName` entry")
    }

    fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut type_name: Option<String> = None;
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or_default());

        while let Some(key) = map.next_key::<String>()? {
            if key == TYPE_NAME_KEY {
                if type_name.is_some() {
                    return Err(Error::duplicate_field(TYPE_NAME_KEY));
                }
                let name = map.next_value::<String>()?;
                if name.is_empty() {
                    return Err(Error::invalid_value(
                        Unexpected::Str(&name),
                        &"a non-empty type name",
                    ));
                }
                type_name = Some(name);
            } else {
                let text = map.next_value::<String>()?;
                log::trace!("json member `{key}`");
                members.push((key, text));
            }
        }

        let Some(type_name) = type_name else {
            return Err(Error::missing_field(TYPE_NAME_KEY));
        };

        Ok(RawRecord { type_name, members })
    }
}
