use std::collections::HashMap;

/// The member category a documentation entry refers to, decoded from the
/// single-letter prefix of the entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// `F:` entries.
    Field,
    /// `P:` entries.
    Property,
    /// `T:` entries.
    Type,
    /// `E:` entries.
    Event,
    /// `M:` entries.
    Method,
}

impl MemberKind {
    /// Decodes an entry-name kind letter; unrecognized letters yield `None`
    /// and the entry is dropped.
    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(Self::Field),
            'P' => Some(Self::Property),
            'T' => Some(Self::Type),
            'E' => Some(Self::Event),
            'M' => Some(Self::Method),
            _ => None,
        }
    }
}

/// One parsed documentation entry.
///
/// `owner` is the qualified name of the type the entry belongs to. For
/// type-level entries it includes the type's own name segment, so all
/// records of a type and its members share the same lookup key.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    /// Which member category the entry documents.
    pub kind: MemberKind,
    /// Qualified name of the owning type.
    pub owner: String,
    /// Simple member name; for type entries, the type's own name.
    pub member_name: String,
    /// Rendered summary text.
    pub summary: String,
    /// Rendered remarks text.
    pub remarks: String,
    /// Example text with per-line indentation trimmed.
    pub example: String,
    /// Returns text, verbatim and trimmed.
    pub returns: String,
    /// Parameter name to description text; first occurrence wins.
    pub parameters: HashMap<String, String>,
}
