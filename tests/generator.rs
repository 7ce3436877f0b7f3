//! Integration tests for full documentation generation runs.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use scriptdoc::docs::DocsGenerator;
use serde_json::{Value, json};
use tempfile::TempDir;

fn string_wrapper() -> Value {
    json!({
        "name": "StringParameter",
        "interfaces": [
            { "name": "ICommandParameter" },
            { "name": "INullableValue`1", "genericArgs": [{ "name": "String" }] }
        ]
    })
}

fn integer_list_wrapper() -> Value {
    json!({
        "name": "IntegerListParameter",
        "interfaces": [
            { "name": "ICommandParameter" },
            { "name": "IEnumerable`1", "genericArgs": [{ "name": "Int32" }] }
        ]
    })
}

fn show_command() -> Value {
    json!({
        "name": "Show",
        "namespace": "Engine.Commands",
        "baseChain": [{ "name": "Command", "namespace": "Engine" }],
        "attributes": [{ "name": "CommandAlias", "args": ["show"] }],
        "interfaces": [{ "name": "ILocalizable" }],
        "fields": [
            {
                "name": "Target",
                "fieldType": string_wrapper(),
                "attributes": [
                    { "name": "CommandParameter" },
                    { "name": "ParameterAlias", "args": [""] },
                    { "name": "RequiredParameter" }
                ]
            },
            {
                "name": "Volumes",
                "fieldType": integer_list_wrapper(),
                "attributes": [
                    { "name": "CommandParameter" },
                    { "name": "ParameterAlias", "args": ["volumes"] }
                ]
            }
        ]
    })
}

fn sample_module() -> Value {
    json!([
        show_command(),
        {
            "name": "Hide",
            "namespace": "Engine.Commands",
            "baseChain": [{ "name": "Command", "namespace": "Engine" }],
            "attributes": [{ "name": "CommandAlias", "args": ["hide"] }]
        },
        {
            "name": "ActorCommand",
            "namespace": "Engine.Commands",
            "isAbstract": true,
            "baseChain": [{ "name": "Command", "namespace": "Engine" }]
        },
        {
            "name": "WaitMode",
            "namespace": "Engine",
            "kind": "enum",
            "enumMembers": [
                { "name": "Timed", "value": 1 },
                { "name": "Instant", "value": 0 }
            ]
        },
        {
            "name": "Actor",
            "namespace": "Engine",
            "methods": [{
                "name": "Hide",
                "returnType": { "name": "Void" },
                "parameters": [{ "name": "duration", "paramType": { "name": "Single" } }]
            }]
        }
    ])
}

const SAMPLE_DOCS: &str = concat!(
    "<doc><members>",
    "<member name=\"T:Engine.Commands.Show\">",
    "<summary>Shows an actor, e.g. via @show *vertical-bar* syntax.</summary>",
    "<example>; @show Kohaku</example>",
    "</member>",
    "<member name=\"F:Engine.Commands.Show.Target\"><summary>Actor to show.</summary></member>",
    "<member name=\"F:Engine.Commands.Show.Volumes\"><summary>Channel volumes.</summary></member>",
    "<member name=\"T:Engine.WaitMode\"><summary>How commands wait.</summary></member>",
    "</members></doc>",
);

fn generate(dir: &TempDir) -> (String, String, Value) {
    let metadata_path = dir.path().join("module.json");
    fs::write(&metadata_path, sample_module().to_string()).unwrap();
    fs::write(dir.path().join("module.xml"), SAMPLE_DOCS).unwrap();

    let output_dir = dir.path().join("out");
    DocsGenerator::new()
        .with_output_dir(&output_dir)
        .with_schema_dir(&output_dir)
        .generate_from_paths(&metadata_path, None, None)
        .unwrap();

    let index = fs::read_to_string(output_dir.join("index.md")).unwrap();
    let reference = fs::read_to_string(output_dir.join("reference.md")).unwrap();
    let schema: Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join("metadata.json")).unwrap())
            .unwrap();
    (index, reference, schema)
}

#[test]
fn commands_render_sorted_by_alias() {
    let dir = TempDir::new().unwrap();
    let (index, _, _) = generate(&dir);

    let hide = index.find("## hide").unwrap();
    let show = index.find("## show").unwrap();
    assert!(hide < show);
}

#[test]
fn abstract_commands_are_excluded() {
    let dir = TempDir::new().unwrap();
    let (index, _, schema) = generate(&dir);

    assert!(!index.contains("ActorCommand"));
    assert!(!index.contains("actorCommand"));
    let ids = schema["commands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|command| command["id"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, ["Hide", "Show"]);
}

#[test]
fn vertical_bar_tokens_become_entities() {
    let dir = TempDir::new().unwrap();
    let (index, _, _) = generate(&dir);

    assert!(index.contains("&#124;"));
    assert!(!index.contains("*vertical-bar*"));
}

#[test]
fn command_block_carries_docs_and_parameter_table() {
    let dir = TempDir::new().unwrap();
    let (index, _, _) = generate(&dir);

    assert!(index.contains("#### Summary\nShows an actor"));
    assert!(index.contains("#### Example\n```\n; @show Kohaku\n```"));
    assert!(index.contains(
        "<span class=\"command-param-nameless command-param-required\""
    ));
    assert!(index.contains(">Target</span> | String | Actor to show."));
    assert!(index.contains("volumes | List&lt;Integer&gt; | Channel volumes."));
}

#[test]
fn schema_matches_the_validator_contract() {
    let dir = TempDir::new().unwrap();
    let (_, _, schema) = generate(&dir);

    let show = schema["commands"]
        .as_array()
        .unwrap()
        .iter()
        .find(|command| command["id"] == "Show")
        .unwrap();

    assert_eq!(show["alias"], "show");
    assert_eq!(show["localizable"], true);
    assert!(show["summary"].as_str().unwrap().contains("Shows an actor"));

    let params = show["params"].as_array().unwrap();
    assert_eq!(params.len(), 2);

    assert_eq!(params[0]["id"], "Target");
    assert_eq!(params[0]["nameless"], true);
    assert_eq!(params[0]["required"], true);
    assert_eq!(params[0]["dataType"], json!({ "kind": "literal", "contentType": "string" }));

    assert_eq!(params[1]["id"], "Volumes");
    assert_eq!(params[1]["alias"], "volumes");
    assert_eq!(params[1]["nameless"], false);
    assert_eq!(params[1]["required"], false);
    assert_eq!(params[1]["dataType"], json!({ "kind": "array", "contentType": "int" }));
}

#[test]
fn general_and_enum_types_render_to_the_reference() {
    let dir = TempDir::new().unwrap();
    let (_, reference, _) = generate(&dir);

    assert!(reference.contains("## WaitMode"));
    assert!(reference.contains("#### Summary\nHow commands wait."));
    assert!(reference.contains("| 0 | Instant |"));
    assert!(reference.contains("| 1 | Timed |"));

    assert!(reference.contains("## Actor"));
    assert!(reference.contains("| void | Hide(`Decimal` duration) |"));
}

#[test]
fn namespace_filter_limits_discovered_types() {
    let dir = TempDir::new().unwrap();
    let metadata_path = dir.path().join("module.json");
    fs::write(&metadata_path, sample_module().to_string()).unwrap();

    let output_dir = dir.path().join("out");
    let summary = DocsGenerator::new()
        .with_output_dir(&output_dir)
        .with_schema_dir(&output_dir)
        .generate_from_paths(&metadata_path, None, Some("^Engine.Commands"))
        .unwrap();

    assert_eq!(summary.commands, 2);
    assert_eq!(summary.types, 0);
    assert!(!output_dir.join("reference.md").exists());
}

#[test]
fn malformed_dump_entries_are_skipped() {
    let dir = TempDir::new().unwrap();
    let metadata_path = dir.path().join("module.json");
    let dump = json!([{ "name": 42 }, show_command()]);
    fs::write(&metadata_path, dump.to_string()).unwrap();

    let output_dir = dir.path().join("out");
    let summary = DocsGenerator::new()
        .with_output_dir(&output_dir)
        .with_schema_dir(&output_dir)
        .generate_from_paths(&metadata_path, None, None)
        .unwrap();

    assert_eq!(summary.commands, 1);
}

#[test]
fn missing_documentation_file_yields_empty_summaries() {
    let dir = TempDir::new().unwrap();
    let metadata_path = dir.path().join("module.json");
    fs::write(&metadata_path, json!([show_command()]).to_string()).unwrap();

    let output_dir = dir.path().join("out");
    DocsGenerator::new()
        .with_output_dir(&output_dir)
        .with_schema_dir(&output_dir)
        .generate_from_paths(&metadata_path, None, None)
        .unwrap();

    let schema: Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join("metadata.json")).unwrap())
            .unwrap();
    let show = &schema["commands"][0];
    assert_eq!(show["summary"], Value::Null);
    assert!(show["params"][0].get("summary").is_none());
}

#[test]
fn intro_text_heads_the_index() {
    let dir = TempDir::new().unwrap();
    let metadata_path = dir.path().join("module.json");
    fs::write(&metadata_path, json!([show_command()]).to_string()).unwrap();

    let output_dir = dir.path().join("out");
    DocsGenerator::new()
        .with_output_dir(&output_dir)
        .with_schema_dir(&output_dir)
        .with_intro("# Command reference\n\n")
        .generate_from_paths(&metadata_path, None, None)
        .unwrap();

    let index = fs::read_to_string(output_dir.join("index.md")).unwrap();
    assert!(index.starts_with("# Command reference\n\n## show"));
}
