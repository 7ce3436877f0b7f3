use serde::Serialize;

use super::params::ParameterDescriptor;
use super::shape::{ContentType, ValueShape};

/// Machine-readable description of one command, serialized into the schema
/// document consumed by the external script validator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSchema {
    /// Command type name.
    pub id: String,
    /// Script alias, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Whether the command's content is subject to localization.
    pub localizable: bool,
    /// Type-level summary, when documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Type-level remarks, when documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Type-level example block, when documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    /// Exposed parameters in declaration order.
    pub params: Vec<ParameterSchema>,
}

/// Machine-readable description of one command parameter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSchema {
    /// Declared member name.
    pub id: String,
    /// Script alias, when declared and non-blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Whether the value is supplied without an identifier.
    pub nameless: bool,
    /// Whether the parameter must always be specified.
    pub required: bool,
    /// Resolved value shape.
    pub data_type: DataTypeSchema,
    /// Parameter summary, when documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Resource-path prefix hint, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_path_prefix: Option<String>,
}

impl ParameterSchema {
    /// Projects a resolved parameter descriptor into its schema form.
    pub fn from_descriptor(param: &ParameterDescriptor) -> Self {
        Self {
            id: param.id.clone(),
            alias: param
                .alias
                .as_deref()
                .filter(|alias| !alias.trim().is_empty())
                .map(str::to_string),
            nameless: param.nameless,
            required: param.required,
            data_type: DataTypeSchema::from(param.shape),
            summary: Some(param.summary.clone()).filter(|summary| !summary.trim().is_empty()),
            resource_path_prefix: param.resource_path_prefix.clone(),
        }
    }
}

/// The `{kind, contentType?}` pair describing a parameter's value structure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeSchema {
    /// Shape token (`literal`, `array`, `map`, `namedLiteral`, `vec2`,
    /// `vec3`, or `unknown`).
    pub kind: &'static str,
    /// Scalar content token, when determined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<&'static str>,
}

impl From<ValueShape> for DataTypeSchema {
    fn from(shape: ValueShape) -> Self {
        Self {
            kind: shape.kind(),
            content_type: shape.content_type().map(ContentType::as_str),
        }
    }
}
