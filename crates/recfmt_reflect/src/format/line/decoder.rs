use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::Zip;
use core::ops::RangeFrom;
use std::io::{BufRead, Lines};

use crate::format::{DELIMITER, FormatError, TYPE_NAME_KEY};

/// Reads a record line by line, keeping 1-based line numbers.
///
/// The header is read on its own so the type can be resolved before any
/// member line is consumed. Line endings may be `\n` or `\r\n`.
pub(super) struct LineReader<'a> {
    lines: Zip<Lines<&'a mut dyn BufRead>, RangeFrom<usize>>,
}

impl<'a> LineReader<'a> {
    #[inline]
    pub fn new(reader: &'a mut dyn BufRead) -> Self {
        Self {
            lines: reader.lines().zip(1_usize..),
        }
    }

    /// Reads the `@TypeName=<type name>` line and returns the type name.
    pub fn read_header(&mut self) -> Result<String, FormatError> {
        let Some((header, _)) = self.lines.next() else {
            return Err(FormatError::MalformedRecord {
                line: 1,
                reason: "record is empty",
            });
        };
        let header = header?;

        match header.split_once(DELIMITER) {
            Some((TYPE_NAME_KEY, type_name)) if !type_name.is_empty() => Ok(type_name.to_owned()),
            _ => Err(FormatError::MalformedRecord {
                line: 1,
                reason: "expected a `@TypeName=<type name>` header",
            }),
        }
    }

    /// Reads every remaining `name=value` line up to the end of the stream.
    ///
    /// Blank lines are skipped. A name starting with `@` is a stray header.
    pub fn read_members(self) -> Result<Vec<(String, String)>, FormatError> {
        let mut members = Vec::new();

        for (line, number) in self.lines {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let Some((name, text)) = line.split_once(DELIMITER) else {
                return Err(FormatError::MalformedRecord {
                    line: number,
                    reason: "expected `name=value`",
                });
            };
            if name.is_empty() {
                return Err(FormatError::MalformedRecord {
                    line: number,
                    reason: "member name is empty",
                });
            }
            if name.starts_with('@') {
                return Err(FormatError::MalformedRecord {
                    line: number,
                    reason: "header key outside the first line",
                });
            }

            log::trace!("line {number}: member `{name}`");
            members.push((name.to_owned(), text.to_owned()));
        }

        Ok(members)
    }
}
