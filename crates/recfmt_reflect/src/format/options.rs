/// What a decoder does when a member name appears on more than one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`FormatError::DuplicateMember`](crate::format::FormatError::DuplicateMember).
    #[default]
    Reject,
    /// Keep the text of the last occurrence.
    LastWins,
}

/// What a decoder does with a member the record type does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownMemberPolicy {
    /// Skip it, logging a warning.
    #[default]
    Ignore,
    /// Fail with [`FormatError::UnknownMember`](crate::format::FormatError::UnknownMember).
    Reject,
}

/// Decoder configuration shared by every formatter.
///
/// # Examples
///
/// ```
/// use recfmt_reflect::format::{DecodeOptions, DuplicatePolicy, UnknownMemberPolicy};
///
/// let options = DecodeOptions::new()
///     .with_duplicates(DuplicatePolicy::LastWins)
///     .with_unknown_members(UnknownMemberPolicy::Reject);
///
/// assert_eq!(options.duplicates, DuplicatePolicy::LastWins);
/// assert_eq!(DecodeOptions::default().unknown_members, UnknownMemberPolicy::Ignore);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub duplicates: DuplicatePolicy,
    pub unknown_members: UnknownMemberPolicy,
}

impl DecodeOptions {
    /// Rejects duplicates and ignores unknown members.
    #[inline]
    pub const fn new() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
            unknown_members: UnknownMemberPolicy::Ignore,
        }
    }

    #[inline]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[inline]
    pub const fn with_unknown_members(mut self, unknown_members: UnknownMemberPolicy) -> Self {
        self.unknown_members = unknown_members;
        self
    }
}
