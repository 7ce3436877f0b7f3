use crate::comments::DocIndex;
use crate::metadata::{TypeDescriptor, markers};
use crate::naming;

/// One rendered member-table row: canonical type name, the display form of
/// the member (for methods, the full signature), and its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRow {
    /// Canonical name of the member's value/return type; the declared
    /// numeric value for enum constants.
    pub type_name: String,
    /// Display form of the member.
    pub display_name: String,
    /// Documentation summary; empty when undocumented.
    pub summary: String,
}

/// Rows for a type's declared fields of the requested staticness.
pub fn field_rows(descriptor: &TypeDescriptor, docs: &DocIndex, want_static: bool) -> Vec<MemberRow> {
    let fields = descriptor
        .fields
        .iter()
        .filter(|field| {
            field.is_static == want_static
                && !field.is_special
                && !field.is_private
                && !markers::is_deprecated(&field.attributes)
        })
        .collect::<Vec<_>>();
    assemble(
        fields,
        descriptor,
        docs,
        |field| naming::display_name(Some(&field.field_type), false),
        |field| &field.name,
        |field| field.name.clone(),
    )
}

/// Rows for a type's declared properties of the requested staticness.
///
/// A property is listed when at least one accessor is non-private.
pub fn property_rows(
    descriptor: &TypeDescriptor,
    docs: &DocIndex,
    want_static: bool,
) -> Vec<MemberRow> {
    let properties = descriptor
        .properties
        .iter()
        .filter(|prop| {
            prop.is_static == want_static
                && !prop.is_special
                && prop.is_accessible()
                && !markers::is_deprecated(&prop.attributes)
        })
        .collect::<Vec<_>>();
    assemble(
        properties,
        descriptor,
        docs,
        |prop| naming::display_name(Some(&prop.property_type), false),
        |prop| &prop.name,
        |prop| prop.name.clone(),
    )
}

/// Rows for a type's declared methods of the requested staticness, rendered
/// with their full signatures.
pub fn method_rows(
    descriptor: &TypeDescriptor,
    docs: &DocIndex,
    want_static: bool,
) -> Vec<MemberRow> {
    let methods = descriptor
        .methods
        .iter()
        .filter(|method| {
            method.is_static == want_static
                && !method.is_special
                && !method.is_private
                && !markers::is_deprecated(&method.attributes)
        })
        .collect::<Vec<_>>();
    assemble(
        methods,
        descriptor,
        docs,
        |method| naming::display_name(Some(&method.return_type), false),
        |method| &method.name,
        naming::method_signature,
    )
}

/// Rows for a type's declared events of the requested staticness.
pub fn event_rows(descriptor: &TypeDescriptor, docs: &DocIndex, want_static: bool) -> Vec<MemberRow> {
    let events = descriptor
        .events
        .iter()
        .filter(|event| {
            event.is_static == want_static
                && !event.is_special
                && !markers::is_deprecated(&event.attributes)
        })
        .collect::<Vec<_>>();
    assemble(
        events,
        descriptor,
        docs,
        |event| naming::display_name(Some(&event.handler_type), false),
        |event| &event.name,
        |event| event.name.clone(),
    )
}

/// Rows for an enumeration's constants, ordered by declared value, with the
/// numeric value in the type column.
pub fn enum_rows(descriptor: &TypeDescriptor, docs: &DocIndex) -> Vec<MemberRow> {
    let mut members = descriptor.enum_members.clone();
    members.sort_by_key(|member| member.value);
    let owner = descriptor.qualified_name();
    members
        .into_iter()
        .map(|member| MemberRow {
            type_name: member.value.to_string(),
            summary: member_summary(docs, &owner, &member.name),
            display_name: member.name,
        })
        .collect()
}

/// Sorts eligible members by name (case-sensitive ordinal), joins each with
/// its documentation on the owning type, and produces display rows.
fn assemble<'a, T>(
    mut members: Vec<&'a T>,
    descriptor: &TypeDescriptor,
    docs: &DocIndex,
    type_name: impl Fn(&T) -> String,
    name: impl Fn(&T) -> &str,
    display_name: impl Fn(&T) -> String,
) -> Vec<MemberRow> {
    members.sort_by(|a, b| name(a).cmp(name(b)));
    let owner = descriptor.qualified_name();
    members
        .into_iter()
        .map(|member| MemberRow {
            type_name: type_name(member),
            display_name: display_name(member),
            summary: member_summary(docs, &owner, name(member)),
        })
        .collect()
}

fn member_summary(docs: &DocIndex, owner: &str, member: &str) -> String {
    docs.member_record(owner, member)
        .map(|record| record.summary.clone())
        .unwrap_or_default()
}
