#![allow(clippy::unwrap_used)]

use super::*;
use crate::comments::DocIndex;
use crate::metadata::{AttrValue, AttributeUsage, FieldDescriptor, PropertyDescriptor, TypeDescriptor};

fn ty(name: &str) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        ..TypeDescriptor::default()
    }
}

fn generic(name: &str, args: Vec<TypeDescriptor>) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        generic_args: args,
        ..TypeDescriptor::default()
    }
}

/// Wrapper exposing its value type through the nullable-value interface,
/// the way modern parameter types are shaped in metadata.
fn nullable_wrapper(name: &str, value: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        interfaces: vec![generic("INullableValue`1", vec![value])],
        ..TypeDescriptor::default()
    }
}

/// Wrapper exposing an element type through the enumerable interface.
fn enumerable_wrapper(name: &str, element: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        interfaces: vec![generic("IEnumerable`1", vec![element])],
        ..TypeDescriptor::default()
    }
}

fn array_of(element: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor {
        name: format!("{}[]", element.name),
        element: Some(Box::new(element)),
        ..TypeDescriptor::default()
    }
}

fn attr(name: &str, args: Vec<AttrValue>) -> AttributeUsage {
    AttributeUsage {
        name: name.to_string(),
        args,
    }
}

mod classification {
    use super::*;

    #[test]
    fn scalar_types_classify_as_literals() {
        assert_eq!(classify(&ty("String")), ValueShape::Literal(ContentType::String));
        assert_eq!(classify(&ty("Int32")), ValueShape::Literal(ContentType::Int));
        assert_eq!(classify(&ty("Single")), ValueShape::Literal(ContentType::Float));
        assert_eq!(classify(&ty("Boolean")), ValueShape::Literal(ContentType::Bool));
    }

    #[test]
    fn string_wrapper_classifies_as_string_literal() {
        let declared = nullable_wrapper("StringParameter", ty("String"));
        assert_eq!(classify(&declared), ValueShape::Literal(ContentType::String));
    }

    #[test]
    fn explicit_nullable_unwraps_to_its_underlying() {
        let mut declared = ty("Nullable`1");
        declared.underlying = Some(Box::new(ty("Single")));
        assert_eq!(classify(&declared), ValueShape::Literal(ContentType::Float));
    }

    #[test]
    fn scalar_arrays_classify_with_content() {
        assert_eq!(
            classify(&array_of(ty("Int32"))),
            ValueShape::Array(Some(ContentType::Int))
        );
    }

    #[test]
    fn arrays_of_unrecognized_elements_keep_undetermined_content() {
        assert_eq!(classify(&array_of(ty("Texture"))), ValueShape::Array(None));
    }

    #[test]
    fn scalar_collections_classify_as_arrays() {
        let declared = enumerable_wrapper("IntegerListParameter", ty("Int32"));
        assert_eq!(classify(&declared), ValueShape::Array(Some(ContentType::Int)));
    }

    #[test]
    fn named_wrapper_classifies_as_named_literal() {
        let declared = nullable_wrapper(
            "NamedDecimalParameter",
            generic("Named`1", vec![ty("Single")]),
        );
        assert_eq!(
            classify(&declared),
            ValueShape::NamedLiteral(Some(ContentType::Float))
        );
    }

    #[test]
    fn collections_of_named_wrappers_classify_as_maps() {
        let declared = enumerable_wrapper(
            "NamedBooleanListParameter",
            generic("Named`1", vec![ty("Boolean")]),
        );
        assert_eq!(classify(&declared), ValueShape::Map(Some(ContentType::Bool)));
    }

    #[test]
    fn legacy_pair_classifies_as_named_literal() {
        let declared = generic("Pair`2", vec![ty("String"), ty("Int32")]);
        assert_eq!(
            classify(&declared),
            ValueShape::NamedLiteral(Some(ContentType::Int))
        );
    }

    #[test]
    fn legacy_literal_map_classifies_as_map() {
        let declared = generic("LiteralMap`1", vec![ty("Boolean")]);
        assert_eq!(classify(&declared), ValueShape::Map(Some(ContentType::Bool)));
    }

    #[test]
    fn vector_type_names_classify_with_float_content() {
        assert_eq!(classify(&ty("Vector2")), ValueShape::Vector2);
        assert_eq!(classify(&ty("Vector3")), ValueShape::Vector3);
        assert_eq!(ValueShape::Vector2.content_type(), Some(ContentType::Float));
        assert_eq!(ValueShape::Vector3.content_type(), Some(ContentType::Float));
    }

    #[test]
    fn unrecognized_types_classify_as_unknown_not_literal() {
        assert_eq!(classify(&ty("CustomStruct")), ValueShape::Unknown);
        assert_ne!(
            classify(&ty("CustomStruct")),
            ValueShape::Literal(ContentType::String)
        );
    }
}

mod parameter_extraction {
    use super::*;

    fn command_with_field(field: FieldDescriptor) -> TypeDescriptor {
        TypeDescriptor {
            name: "Show".to_string(),
            namespace: "Engine.Commands".to_string(),
            base_chain: vec![ty("Command")],
            fields: vec![field],
            ..TypeDescriptor::default()
        }
    }

    fn field(name: &str, field_type: TypeDescriptor, attributes: Vec<AttributeUsage>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            field_type,
            attributes,
            ..FieldDescriptor::default()
        }
    }

    #[test]
    fn only_marked_members_become_parameters() {
        let descriptor = TypeDescriptor {
            fields: vec![
                field("Target", nullable_wrapper("StringParameter", ty("String")), vec![attr("CommandParameter", vec![])]),
                field("internalState", ty("Int32"), vec![]),
            ],
            ..command_with_field(field("x", ty("Int32"), vec![]))
        };

        let params = extract_parameters(&descriptor, &DocIndex::default());
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].id, "Target");
    }

    #[test]
    fn modern_markers_resolve_alias_and_required() {
        let descriptor = command_with_field(field(
            "Target",
            nullable_wrapper("StringParameter", ty("String")),
            vec![
                attr("CommandParameter", vec![]),
                attr("ParameterAlias", vec![AttrValue::Str(String::new())]),
                attr("RequiredParameter", vec![]),
            ],
        ));

        let params = extract_parameters(&descriptor, &DocIndex::default());
        assert_eq!(params[0].alias.as_deref(), Some(""));
        assert!(params[0].nameless);
        assert!(params[0].required);
        assert_eq!(params[0].shape, ValueShape::Literal(ContentType::String));
    }

    #[test]
    fn legacy_marker_packs_alias_and_optionality() {
        let descriptor = TypeDescriptor {
            name: "ShowBackground".to_string(),
            namespace: "Script.Actions".to_string(),
            properties: vec![PropertyDescriptor {
                name: "Color".to_string(),
                property_type: ty("String"),
                attributes: vec![attr(
                    "ActionParameterAttribute",
                    vec![AttrValue::Str("tint".to_string()), AttrValue::Bool(true)],
                )],
                ..PropertyDescriptor::default()
            }],
            ..TypeDescriptor::default()
        };

        let params = extract_parameters(&descriptor, &DocIndex::default());
        assert_eq!(params[0].alias.as_deref(), Some("tint"));
        assert!(!params[0].nameless);
        assert!(!params[0].required, "optional=true negates to not required");
    }

    #[test]
    fn legacy_non_optional_parameter_is_required() {
        let descriptor = command_with_field(field(
            "Path",
            ty("String"),
            vec![attr(
                "ActionParameter",
                vec![AttrValue::Str(String::new()), AttrValue::Bool(false)],
            )],
        ));

        let params = extract_parameters(&descriptor, &DocIndex::default());
        assert!(params[0].nameless);
        assert!(params[0].required);
    }

    #[test]
    fn resource_prefix_hint_is_captured() {
        let descriptor = command_with_field(field(
            "Music",
            nullable_wrapper("StringParameter", ty("String")),
            vec![
                attr("CommandParameter", vec![]),
                attr("ResourcePathPrefix", vec![AttrValue::Str("Audio".to_string())]),
            ],
        ));

        let params = extract_parameters(&descriptor, &DocIndex::default());
        assert_eq!(params[0].resource_path_prefix.as_deref(), Some("Audio"));
    }

    #[test]
    fn deprecated_and_static_members_are_skipped() {
        let mut stale = field(
            "Old",
            ty("String"),
            vec![attr("CommandParameter", vec![]), attr("Obsolete", vec![])],
        );
        stale.is_static = false;
        let mut shared = field("Shared", ty("String"), vec![attr("CommandParameter", vec![])]);
        shared.is_static = true;

        let descriptor = TypeDescriptor {
            fields: vec![stale, shared],
            ..command_with_field(field("x", ty("Int32"), vec![]))
        };

        assert!(extract_parameters(&descriptor, &DocIndex::default()).is_empty());
    }

    #[test]
    fn parameter_summary_resolves_through_ancestors() {
        let index = DocIndex::from_tree(
            "<doc><members><member name=\"F:Engine.Command.Wait\"><summary>Waits before executing.</summary></member></members></doc>",
            None,
        )
        .unwrap();

        let mut base = ty("Command");
        base.namespace = "Engine".to_string();
        let descriptor = TypeDescriptor {
            base_chain: vec![base],
            ..command_with_field(field(
                "Wait",
                nullable_wrapper("BooleanParameter", ty("Boolean")),
                vec![attr("CommandParameter", vec![])],
            ))
        };

        let params = extract_parameters(&descriptor, &index);
        assert_eq!(params[0].summary, "Waits before executing.");
    }
}

mod schema_output {
    use super::*;

    #[test]
    fn unknown_shape_serializes_without_content_type() {
        let data_type = DataTypeSchema::from(ValueShape::Unknown);
        let value = serde_json::to_value(&data_type).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "unknown" }));
    }

    #[test]
    fn shapes_serialize_with_camel_case_tokens() {
        let named = serde_json::to_value(DataTypeSchema::from(ValueShape::NamedLiteral(Some(
            ContentType::Float,
        ))))
        .unwrap();
        assert_eq!(
            named,
            serde_json::json!({ "kind": "namedLiteral", "contentType": "float" })
        );

        let vec2 = serde_json::to_value(DataTypeSchema::from(ValueShape::Vector2)).unwrap();
        assert_eq!(vec2, serde_json::json!({ "kind": "vec2", "contentType": "float" }));
    }

    #[test]
    fn blank_alias_and_summary_are_omitted() {
        let param = ParameterDescriptor {
            id: "Target".to_string(),
            alias: Some(String::new()),
            nameless: true,
            required: true,
            value_type: ty("String"),
            resource_path_prefix: None,
            shape: ValueShape::Literal(ContentType::String),
            summary: String::new(),
        };

        let value = serde_json::to_value(ParameterSchema::from_descriptor(&param)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "Target",
                "nameless": true,
                "required": true,
                "dataType": { "kind": "literal", "contentType": "string" }
            })
        );
    }
}
