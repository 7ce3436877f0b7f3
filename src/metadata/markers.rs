//! Fixed marker vocabulary of the inspected command modules.
//!
//! Two generations of the scripting runtime are in circulation. Modern
//! modules derive their commands from the `Command` base type and mark
//! parameters with `CommandParameter` plus the standalone `RequiredParameter`
//! attribute; legacy modules place commands under the `Script.Actions`
//! namespace and pack alias and optionality into the `ActionParameter`
//! attribute's constructor arguments. Both conventions are recognized,
//! selected by which markers a given type actually carries. Collapsing to a
//! single convention is an open compatibility question; do not remove either
//! path without confirming which one target modules still use.

use super::{AttributeUsage, TypeDescriptor};

/// Base type marking command types in modern modules.
pub const COMMAND_BASE_TYPE: &str = "Command";

/// Namespace prefix marking command types in legacy modules.
pub const LEGACY_COMMAND_NAMESPACE: &str = "Script.Actions";

/// Interface implemented by every parameter-wrapper type.
pub const PARAMETER_WRAPPER_INTERFACE: &str = "ICommandParameter";

/// Interface marking commands whose content is subject to localization.
pub const LOCALIZABLE_INTERFACE: &str = "ILocalizable";

/// One-argument interface exposing a wrapper's nullable value type.
pub const NULLABLE_VALUE_INTERFACE: &str = "INullableValue";

/// One-argument interface marking collection-like wrapper types.
pub const ENUMERABLE_INTERFACE: &str = "IEnumerable";

/// Wrapper pairing a value with an identifying key.
pub const NAMED_WRAPPER: &str = "Named";

/// Legacy two-argument named wrapper; the value is the second argument.
pub const LEGACY_NAMED_WRAPPER: &str = "Pair";

/// Legacy lookup-table type; the scalar content is the sole argument.
pub const LEGACY_MAP_TYPE: &str = "LiteralMap";

/// Two-component numeric vector type name.
pub const VECTOR2_TYPE: &str = "Vector2";

/// Three-component numeric vector type name.
pub const VECTOR3_TYPE: &str = "Vector3";

/// Attribute carrying a command's script alias as its first argument.
pub const COMMAND_ALIAS_ATTRIBUTE: &str = "CommandAlias";

/// Attribute marking a member as a command parameter (modern modules).
pub const PARAMETER_ATTRIBUTE: &str = "CommandParameter";

/// Attribute marking a member as a command parameter (legacy modules);
/// constructor arguments are `[alias, optional]`.
pub const LEGACY_PARAMETER_ATTRIBUTE: &str = "ActionParameter";

/// Attribute carrying a parameter's script alias as its first argument.
pub const PARAMETER_ALIAS_ATTRIBUTE: &str = "ParameterAlias";

/// Attribute marking a parameter as required (modern modules).
pub const REQUIRED_ATTRIBUTE: &str = "RequiredParameter";

/// Attribute carrying a parameter's resource-path prefix as its first argument.
pub const RESOURCE_PREFIX_ATTRIBUTE: &str = "ResourcePathPrefix";

/// Attribute excluding a member or type from generated output.
pub const DEPRECATED_ATTRIBUTE: &str = "Obsolete";

/// Engine-managed parameter names omitted from rendered parameter tables.
pub const RESERVED_PARAMETERS: [&str; 3] = ["Wait", "Duration", "ConditionalExpression"];

/// Site-domain marker used to shorten external documentation links.
pub const SITE_DOMAIN_MARKER: &str = "scriptdoc.dev";

/// Whether a type belongs to the command vocabulary under either convention.
pub fn is_command(descriptor: &TypeDescriptor) -> bool {
    descriptor
        .base_chain
        .iter()
        .any(|base| base.simple_name() == COMMAND_BASE_TYPE)
        || descriptor
            .qualified_name()
            .starts_with(LEGACY_COMMAND_NAMESPACE)
}

/// The command's script alias, when an alias attribute is present.
pub fn command_alias(descriptor: &TypeDescriptor) -> Option<String> {
    descriptor
        .attribute(COMMAND_ALIAS_ATTRIBUTE)
        .and_then(|attr| attr.args.first())
        .and_then(|arg| arg.as_str())
        .map(str::to_string)
}

/// Whether the type implements the localization marker interface.
pub fn is_localizable(descriptor: &TypeDescriptor) -> bool {
    descriptor.implements(LOCALIZABLE_INTERFACE)
}

/// Whether a member or type carries the deprecation marker.
pub fn is_deprecated(attributes: &[AttributeUsage]) -> bool {
    attributes
        .iter()
        .any(|attr| attr.matches(DEPRECATED_ATTRIBUTE))
}

/// The parameter marker attribute of either convention, if present.
pub fn parameter_attribute(attributes: &[AttributeUsage]) -> Option<&AttributeUsage> {
    attributes
        .iter()
        .find(|attr| attr.matches(PARAMETER_ATTRIBUTE) || attr.matches(LEGACY_PARAMETER_ATTRIBUTE))
}
