use serde::Deserialize;

use super::{AttributeUsage, TypeDescriptor};

/// A field declared on a type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Member name.
    pub name: String,
    /// Declared field type.
    pub field_type: TypeDescriptor,
    /// Whether the field is static rather than per-instance.
    pub is_static: bool,
    /// Whether the field is compiler-generated (backing fields and the like).
    pub is_special: bool,
    /// Whether the field is fully private.
    pub is_private: bool,
    /// Declarative markers applied to the field.
    pub attributes: Vec<AttributeUsage>,
}

/// A property declared on a type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Member name.
    pub name: String,
    /// Declared property type.
    pub property_type: TypeDescriptor,
    /// Whether the property is static rather than per-instance.
    pub is_static: bool,
    /// Whether the property is compiler-generated.
    pub is_special: bool,
    /// Read accessor, if the property has one.
    pub getter: Option<AccessorDescriptor>,
    /// Write accessor, if the property has one.
    pub setter: Option<AccessorDescriptor>,
    /// Declarative markers applied to the property.
    pub attributes: Vec<AttributeUsage>,
}

impl PropertyDescriptor {
    /// Whether the property is visible for documentation purposes.
    ///
    /// A property counts as accessible when at least one of its accessors
    /// is non-private; a property with no accessors at all is not.
    pub fn is_accessible(&self) -> bool {
        match (&self.getter, &self.setter) {
            (Some(get), Some(set)) => !(get.is_private && set.is_private),
            (Some(get), None) => !get.is_private,
            (None, Some(set)) => !set.is_private,
            (None, None) => false,
        }
    }
}

/// One accessor (getter or setter) of a property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessorDescriptor {
    /// Whether the accessor is private.
    pub is_private: bool,
}

/// A method declared on a type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodDescriptor {
    /// Member name.
    pub name: String,
    /// Declared return type.
    pub return_type: TypeDescriptor,
    /// Whether the method is static rather than per-instance.
    pub is_static: bool,
    /// Whether the method is compiler-generated (accessors, operators).
    pub is_special: bool,
    /// Whether the method is private.
    pub is_private: bool,
    /// Whether the method is an extension taking a leading receiver parameter.
    pub is_extension: bool,
    /// Formal parameters in declaration order.
    pub parameters: Vec<MethodParam>,
    /// Declarative markers applied to the method.
    pub attributes: Vec<AttributeUsage>,
}

/// One formal parameter of a method signature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodParam {
    /// Parameter name.
    pub name: String,
    /// Declared parameter type.
    pub param_type: TypeDescriptor,
    /// Rendered default value, when the parameter declares one.
    pub default_value: Option<String>,
}

/// An event declared on a type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventDescriptor {
    /// Member name.
    pub name: String,
    /// Declared handler type.
    pub handler_type: TypeDescriptor,
    /// Whether the event is static rather than per-instance.
    pub is_static: bool,
    /// Whether the event is compiler-generated.
    pub is_special: bool,
    /// Declarative markers applied to the event.
    pub attributes: Vec<AttributeUsage>,
}

/// One named constant of an enumeration type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumMember {
    /// Constant name.
    pub name: String,
    /// Declared numeric value.
    pub value: i64,
}
