//! Type metadata model for inspected command modules.
//!
//! Descriptors mirror the reflection surface of a compiled module: type
//! names and ancestry, generic arguments, member lists, and declarative
//! marker attributes. The external loader produces them (usually from a
//! JSON dump) and the extraction engine consumes them read-only.

mod attributes;
mod descriptor;
mod loader;
pub mod markers;
mod members;

pub use attributes::{AttrValue, AttributeUsage};
pub use descriptor::{TypeDescriptor, TypeKind};
pub use loader::{load_doc_tree, load_types, sibling_doc_path};
pub use members::{
    AccessorDescriptor, EnumMember, EventDescriptor, FieldDescriptor, MethodDescriptor,
    MethodParam, PropertyDescriptor,
};
