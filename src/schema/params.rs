use crate::comments::DocIndex;
use crate::metadata::{AttrValue, AttributeUsage, TypeDescriptor, markers};

use super::classify::classify;
use super::shape::ValueShape;

/// One exposed parameter of a command type, with every marker attribute
/// resolved into plain fields at construction time.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// Declared member name.
    pub id: String,
    /// Script alias, when an alias marker is present. An empty alias marks
    /// the parameter as nameless.
    pub alias: Option<String>,
    /// Whether the parameter is supplied without an identifier in scripts.
    pub nameless: bool,
    /// Whether the parameter must always be specified.
    pub required: bool,
    /// Declared value type.
    pub value_type: TypeDescriptor,
    /// Resource-path prefix hint, when a resource marker is present.
    pub resource_path_prefix: Option<String>,
    /// Resolved value shape.
    pub shape: ValueShape,
    /// Documentation summary, resolved through the ancestor chain; empty
    /// when undocumented.
    pub summary: String,
}

/// Collects the command parameters declared on a type.
///
/// Instance properties and fields carrying a parameter marker attribute each
/// become one descriptor. Member enumeration is declared-only, but the
/// documentation join walks the ancestor chain so parameters inherited from
/// base command types keep their summaries.
pub fn extract_parameters(descriptor: &TypeDescriptor, docs: &DocIndex) -> Vec<ParameterDescriptor> {
    let properties = descriptor
        .properties
        .iter()
        .filter(|prop| !prop.is_static && !prop.is_special)
        .map(|prop| (&prop.name, &prop.property_type, &prop.attributes));
    let fields = descriptor
        .fields
        .iter()
        .filter(|field| !field.is_static && !field.is_special)
        .map(|field| (&field.name, &field.field_type, &field.attributes));

    properties
        .chain(fields)
        .filter(|(_, _, attributes)| !markers::is_deprecated(attributes))
        .filter_map(|(name, value_type, attributes)| {
            let marker = markers::parameter_attribute(attributes)?;
            Some(build_parameter(
                descriptor, name, value_type, attributes, marker, docs,
            ))
        })
        .collect()
}

fn build_parameter(
    owner: &TypeDescriptor,
    name: &str,
    value_type: &TypeDescriptor,
    attributes: &[AttributeUsage],
    marker: &AttributeUsage,
    docs: &DocIndex,
) -> ParameterDescriptor {
    let alias = parameter_alias(attributes, marker);
    let nameless = alias.as_deref() == Some("");
    let required = parameter_required(attributes, marker);
    let resource_path_prefix = attributes
        .iter()
        .find(|attr| attr.matches(markers::RESOURCE_PREFIX_ATTRIBUTE))
        .and_then(|attr| attr.args.first())
        .and_then(AttrValue::as_str)
        .map(str::to_string);
    let summary = docs
        .inherited_member_record(owner, name)
        .map(|record| record.summary.clone())
        .unwrap_or_default();

    ParameterDescriptor {
        id: name.to_string(),
        alias,
        nameless,
        required,
        value_type: value_type.clone(),
        resource_path_prefix,
        shape: classify(value_type),
        summary,
    }
}

/// The alias marker attribute wins; legacy modules instead pack the alias
/// into the parameter attribute's first string argument.
fn parameter_alias(attributes: &[AttributeUsage], marker: &AttributeUsage) -> Option<String> {
    attributes
        .iter()
        .find(|attr| attr.matches(markers::PARAMETER_ALIAS_ATTRIBUTE))
        .and_then(|attr| attr.args.first())
        .and_then(AttrValue::as_str)
        .map(str::to_string)
        .or_else(|| {
            marker
                .args
                .iter()
                .find_map(AttrValue::as_str)
                .map(str::to_string)
        })
}

/// Required under the modern convention means the standalone marker is
/// present; under the legacy convention it is the negation of the boolean
/// optionality argument on the parameter attribute itself.
fn parameter_required(attributes: &[AttributeUsage], marker: &AttributeUsage) -> bool {
    if attributes
        .iter()
        .any(|attr| attr.matches(markers::REQUIRED_ATTRIBUTE))
    {
        return true;
    }
    marker
        .args
        .iter()
        .find_map(AttrValue::as_bool)
        .map(|optional| !optional)
        .unwrap_or(false)
}
