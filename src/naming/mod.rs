//! Canonical display names for type descriptors.
//!
//! Every descriptor shape normalizes to a readable token: parameter-wrapper
//! types map to a fixed display table, arrays render as escaped `List<...>`,
//! nullable wrappers are transparent, and generic types render their
//! arguments recursively. The functions here are total; unrecognized shapes
//! degrade to the raw metadata name rather than failing.

use crate::metadata::{MethodDescriptor, TypeDescriptor, markers};

/// Produces the canonical display form of a type descriptor.
///
/// `None` renders as an empty string so callers can pass optional base
/// types straight through. When `fully_qualified` is set the namespace is
/// included for the outermost type; generic arguments always render with
/// simple names.
pub fn display_name(descriptor: Option<&TypeDescriptor>, fully_qualified: bool) -> String {
    let Some(descriptor) = descriptor else {
        return String::new();
    };
    if descriptor.name == "Void" {
        return "void".to_string();
    }
    if descriptor.implements(markers::PARAMETER_WRAPPER_INTERFACE) {
        return wrapper_token(&descriptor.name).to_string();
    }
    if let Some(underlying) = descriptor.underlying.as_deref() {
        return display_name(Some(underlying), fully_qualified);
    }
    if let Some(element) = descriptor.element.as_deref() {
        return format!("List&lt;{}&gt;", display_name(Some(element), false));
    }
    if !descriptor.is_generic() {
        let raw = if fully_qualified {
            descriptor.qualified_name()
        } else {
            descriptor.name.clone()
        };
        return raw.replace("Int32", "Integer").replace("Single", "Decimal");
    }

    let inner = descriptor
        .generic_args
        .iter()
        .map(|arg| display_name(Some(arg), false))
        .collect::<Vec<_>>()
        .join(", ");
    let open = if fully_qualified && !descriptor.namespace.is_empty() {
        format!("{}.{}", descriptor.namespace, descriptor.simple_name())
    } else {
        descriptor.simple_name().to_string()
    };
    format!("{open}&lt;{inner}&gt;")
}

/// Renders a method as `name(\`Type\` param = default, ...)` for member tables.
///
/// Angle brackets in generic method names are HTML-escaped, and extension
/// methods prefix their receiver with the `this ` token.
pub fn method_signature(method: &MethodDescriptor) -> String {
    let rendered = method
        .parameters
        .iter()
        .map(|param| {
            let mut part = format!("`{}` {}", display_name(Some(&param.param_type), false), param.name);
            if let Some(default) = &param.default_value {
                part.push_str(" = ");
                part.push_str(default);
            }
            part
        })
        .collect::<Vec<_>>()
        .join(", ");

    let name = method.name.replace('<', "&lt;").replace('>', "&gt;");
    let receiver = if method.is_extension { "this " } else { "" };
    format!("{name}({receiver}{rendered})")
}

/// Fixed display tokens for the closed set of parameter-wrapper type names.
fn wrapper_token(name: &str) -> &'static str {
    match name {
        "StringParameter" => "String",
        "IntegerParameter" => "Integer",
        "DecimalParameter" => "Decimal",
        "BooleanParameter" => "Boolean",
        "NamedStringParameter" => "Named&lt;String&gt;",
        "NamedIntegerParameter" => "Named&lt;Integer&gt;",
        "NamedDecimalParameter" => "Named&lt;Decimal&gt;",
        "NamedBooleanParameter" => "Named&lt;Boolean&gt;",
        "StringListParameter" => "List&lt;String&gt;",
        "IntegerListParameter" => "List&lt;Integer&gt;",
        "DecimalListParameter" => "List&lt;Decimal&gt;",
        "BooleanListParameter" => "List&lt;Boolean&gt;",
        "NamedStringListParameter" => "List&lt;Named&lt;String&gt;&gt;",
        "NamedIntegerListParameter" => "List&lt;Named&lt;Integer&gt;&gt;",
        "NamedDecimalListParameter" => "List&lt;Named&lt;Decimal&gt;&gt;",
        "NamedBooleanListParameter" => "List&lt;Named&lt;Boolean&gt;&gt;",
        _ => "Unknown",
    }
}
