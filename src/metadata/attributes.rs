use serde::Deserialize;

/// A declarative marker applied to a type or member in the inspected module.
///
/// Attributes carry no behavior of their own; the extraction engine reads
/// their presence and constructor arguments to derive aliases, required
/// flags, and resource hints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeUsage {
    /// Attribute type name as found in metadata, with or without the
    /// conventional `Attribute` suffix.
    pub name: String,
    /// Constructor argument values in declaration order.
    pub args: Vec<AttrValue>,
}

impl AttributeUsage {
    /// Whether this attribute matches a marker name.
    ///
    /// Compiled metadata records the suffixed spelling (`CommandAliasAttribute`)
    /// while hand-written dumps tend to use the bare one (`CommandAlias`);
    /// both are accepted.
    pub fn matches(&self, marker: &str) -> bool {
        self.name == marker || self.name.strip_suffix("Attribute") == Some(marker)
    }
}

/// A single attribute constructor argument.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean argument.
    Bool(bool),
    /// Integer argument.
    Int(i64),
    /// Floating-point argument.
    Float(f64),
    /// String argument.
    Str(String),
}

impl AttrValue {
    /// Returns the string content if this argument is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean content if this argument is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}
