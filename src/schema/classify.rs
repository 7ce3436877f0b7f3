use crate::metadata::{TypeDescriptor, markers};

use super::shape::{ContentType, ValueShape};

/// Resolves the value shape of a parameter's declared type.
///
/// The declared type is first unwrapped through one layer of nullable
/// indirection (an explicit nullable wrapper or the single-argument
/// nullable-value interface), then matched against the closed vocabulary:
/// scalars, collections of scalars, named scalars and their collection
/// (lookup-table) form, the legacy map and pair types, and fixed-size
/// vectors. Anything else is `Unknown` — degraded, not rejected, so a
/// single odd parameter never aborts generation.
pub fn classify(declared: &TypeDescriptor) -> ValueShape {
    let ty = effective_value_type(declared);

    if let Some(content) = scalar_content(ty) {
        return ValueShape::Literal(content);
    }

    if let Some(element) = ty.element.as_deref() {
        let element = effective_value_type(element);
        if let Some(inner) = named_inner(element) {
            return ValueShape::Map(scalar_content(effective_value_type(inner)));
        }
        return ValueShape::Array(scalar_content(element));
    }

    if let Some(element) = enumerable_element(ty) {
        let element = effective_value_type(element);
        if let Some(inner) = named_inner(element) {
            return ValueShape::Map(scalar_content(effective_value_type(inner)));
        }
        if let Some(content) = scalar_content(element) {
            return ValueShape::Array(Some(content));
        }
    }

    if ty.simple_name() == markers::LEGACY_MAP_TYPE && !ty.generic_args.is_empty() {
        return ValueShape::Map(scalar_content(&ty.generic_args[0]));
    }

    if let Some(inner) = named_inner(ty) {
        return ValueShape::NamedLiteral(scalar_content(effective_value_type(inner)));
    }

    match ty.name.as_str() {
        name if name == markers::VECTOR2_TYPE => ValueShape::Vector2,
        name if name == markers::VECTOR3_TYPE => ValueShape::Vector3,
        _ => ValueShape::Unknown,
    }
}

/// Unwraps one layer of nullable indirection, if present.
fn effective_value_type(descriptor: &TypeDescriptor) -> &TypeDescriptor {
    if let Some(underlying) = descriptor.underlying.as_deref() {
        return underlying;
    }
    if let Some(iface) = descriptor.interface_with_args(markers::NULLABLE_VALUE_INTERFACE, 1) {
        return &iface.generic_args[0];
    }
    descriptor
}

fn scalar_content(descriptor: &TypeDescriptor) -> Option<ContentType> {
    ContentType::from_metadata_name(&descriptor.name)
}

/// The wrapped value type of a named wrapper, under either convention: the
/// single-argument `Named` form or the legacy two-argument pair whose value
/// is the second argument.
fn named_inner(descriptor: &TypeDescriptor) -> Option<&TypeDescriptor> {
    if descriptor.simple_name() == markers::NAMED_WRAPPER && descriptor.generic_args.len() == 1 {
        return descriptor.generic_args.first();
    }
    if descriptor.simple_name() == markers::LEGACY_NAMED_WRAPPER
        && descriptor.generic_args.len() == 2
    {
        return descriptor.generic_args.get(1);
    }
    None
}

fn enumerable_element(descriptor: &TypeDescriptor) -> Option<&TypeDescriptor> {
    descriptor
        .interface_with_args(markers::ENUMERABLE_INTERFACE, 1)
        .map(|iface| &iface.generic_args[0])
}
