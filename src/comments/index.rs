use std::collections::HashMap;

use crate::core::Result;
use crate::metadata::TypeDescriptor;

use super::parser::parse_doc_tree;
use super::record::{CommentRecord, MemberKind};

/// Read-only lookup from owning-type qualified name to the ordered comment
/// records parsed for that type and its members.
///
/// The index is built once per generation run and shared by reference while
/// each type's model is constructed.
#[derive(Debug, Default)]
pub struct DocIndex {
    records: HashMap<String, Vec<CommentRecord>>,
}

impl DocIndex {
    /// Groups parsed records by owning type, preserving source order within
    /// each key.
    pub fn build(records: Vec<CommentRecord>) -> Self {
        let mut grouped: HashMap<String, Vec<CommentRecord>> = HashMap::new();
        for record in records {
            grouped.entry(record.owner.clone()).or_default().push(record);
        }
        Self { records: grouped }
    }

    /// Parses an XML documentation tree and builds the index in one step.
    ///
    /// # Errors
    ///
    /// Returns `ScriptdocError::DocTreeParse` when the tree is not
    /// well-formed XML.
    pub fn from_tree(xml: &str, namespace_filter: Option<&str>) -> Result<Self> {
        Ok(Self::build(parse_doc_tree(xml, namespace_filter)?))
    }

    /// All records owned by a type, in source order; empty when the type has
    /// no documentation.
    pub fn records(&self, owner: &str) -> &[CommentRecord] {
        self.records.get(owner).map_or(&[], Vec::as_slice)
    }

    /// The type-level record of a type, if one was parsed.
    pub fn type_record(&self, owner: &str) -> Option<&CommentRecord> {
        self.records(owner)
            .iter()
            .find(|record| record.kind == MemberKind::Type)
    }

    /// The first record documenting `member` on `owner`.
    ///
    /// Matches the exact member name or its generic-arity encoding (the name
    /// followed by a backtick suffix).
    pub fn member_record(&self, owner: &str, member: &str) -> Option<&CommentRecord> {
        self.records(owner)
            .iter()
            .find(|record| member_name_matches(&record.member_name, member))
    }

    /// Searches a type and then its ancestors, most-derived first, for a
    /// record documenting `member`; the first hit wins.
    ///
    /// This is how inherited parameter documentation resolves: the member is
    /// declared on a base command type but enumerated on the derived one.
    pub fn inherited_member_record(
        &self,
        descriptor: &TypeDescriptor,
        member: &str,
    ) -> Option<&CommentRecord> {
        std::iter::once(descriptor)
            .chain(descriptor.base_chain.iter())
            .find_map(|ancestor| self.member_record(&ancestor.qualified_name(), member))
    }
}

fn member_name_matches(candidate: &str, member: &str) -> bool {
    candidate
        .strip_prefix(member)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('`'))
}
