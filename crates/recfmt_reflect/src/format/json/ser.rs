use alloc::string::String;

use serde_core::ser::SerializeMap;
use serde_core::{Serialize, Serializer};

use crate::format::TYPE_NAME_KEY;

/// Serializes the header entry followed by already converted member texts.
pub(super) struct RecordSerializer<'a> {
    pub type_name: &'static str,
    pub members: &'a [(&'static str, String)],
}

impl Serialize for RecordSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.members.len() + 1))?;
        state.serialize_entry(TYPE_NAME_KEY, self.type_name)?;
        for (name, text) in self.members {
            state.serialize_entry(name, text)?;
        }
        state.end()
    }
}
