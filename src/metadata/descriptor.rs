use serde::Deserialize;

use super::{
    AttributeUsage, EnumMember, EventDescriptor, FieldDescriptor, MethodDescriptor,
    PropertyDescriptor,
};

/// The kind of a type declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A reference type.
    #[default]
    Class,
    /// A value type.
    Struct,
    /// An interface.
    Interface,
    /// An enumeration.
    Enum,
}

/// Metadata handle describing one type discovered in the inspected module.
///
/// Descriptors are supplied by the external loader (typically deserialized
/// from a JSON metadata dump) and are immutable for the duration of a
/// generation run. Generic arguments, array element types, nullable
/// underlying types, interfaces, and the base-type chain are all nested
/// descriptors, so the whole shape of a type is available without further
/// lookups.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Simple type name, including any generic-arity suffix (`Named`1`).
    pub name: String,
    /// Declaring namespace; empty for global types.
    pub namespace: String,
    /// Declaration kind.
    pub kind: TypeKind,
    /// Whether the type is abstract.
    pub is_abstract: bool,
    /// Whether the type is sealed.
    pub is_sealed: bool,
    /// Generic type arguments in declaration order; empty for non-generic types.
    pub generic_args: Vec<TypeDescriptor>,
    /// Element type, when this descriptor represents an array.
    pub element: Option<Box<TypeDescriptor>>,
    /// Underlying type, when this descriptor is an optional/nullable wrapper.
    pub underlying: Option<Box<TypeDescriptor>>,
    /// Declarative markers applied to the type.
    pub attributes: Vec<AttributeUsage>,
    /// Interfaces the type implements.
    pub interfaces: Vec<TypeDescriptor>,
    /// Ancestor types, most-derived first, excluding the type itself.
    pub base_chain: Vec<TypeDescriptor>,
    /// Declared fields (instance and static).
    pub fields: Vec<FieldDescriptor>,
    /// Declared properties (instance and static).
    pub properties: Vec<PropertyDescriptor>,
    /// Declared methods (instance and static).
    pub methods: Vec<MethodDescriptor>,
    /// Declared events (instance and static).
    pub events: Vec<EventDescriptor>,
    /// Enumeration constants, when the type is an enum.
    pub enum_members: Vec<EnumMember>,
}

impl TypeDescriptor {
    /// The namespace-qualified name used as a documentation lookup key.
    ///
    /// Constructed generic instantiations append bracketed argument lists to
    /// their metadata name; everything from the first `[` is dropped so the
    /// key matches the open form used by documentation entries.
    pub fn qualified_name(&self) -> String {
        let full = if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        };
        match full.find('[') {
            Some(idx) => full[..idx].to_string(),
            None => full,
        }
    }

    /// Simple name with any generic-arity suffix stripped.
    pub fn simple_name(&self) -> &str {
        match self.name.find('`') {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }

    /// Whether the type carries generic arguments.
    pub fn is_generic(&self) -> bool {
        !self.generic_args.is_empty()
    }

    /// Whether the type is an enumeration.
    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    /// Whether the type carries an attribute matching `marker`.
    pub fn has_attribute(&self, marker: &str) -> bool {
        self.attribute(marker).is_some()
    }

    /// First attribute matching `marker`, if any.
    pub fn attribute(&self, marker: &str) -> Option<&AttributeUsage> {
        self.attributes.iter().find(|attr| attr.matches(marker))
    }

    /// Whether the type implements an interface with the given simple name.
    pub fn implements(&self, marker: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface| iface.simple_name() == marker)
    }

    /// An implemented interface matching `marker` with exactly `arity`
    /// generic arguments, if any.
    pub fn interface_with_args(&self, marker: &str, arity: usize) -> Option<&TypeDescriptor> {
        self.interfaces
            .iter()
            .find(|iface| iface.simple_name() == marker && iface.generic_args.len() == arity)
    }
}
