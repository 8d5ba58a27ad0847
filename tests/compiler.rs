//! Tests for turning parsed rows into conf documents.
mod common;
use common::*;
use kensa::prelude::*;
use serde_json::json;

#[test]
fn test_compiler_simple_sheet() {
    let doc = compile_text(SIMPLE_SHEET);

    assert_eq!(doc.decision_id, "ABC");
    assert_eq!(doc.dmn_path, vec!["dmns".to_string(), "model.dmn".to_string()]);
    assert_eq!(doc.is_active, "true");
    assert!(doc.data.variables.is_empty());

    assert_eq!(doc.test_cases().len(), 1);
    let case = &doc.test_cases()[0];
    assert_eq!(case.inputs.get("age"), Some(&TypedValue::Number(30.0)));
    assert_eq!(case.results.len(), 1);
    assert_eq!(case.results[0].row_index, "1");
    assert_eq!(
        case.results[0].outputs.get("approved"),
        Some(&TypedValue::Bool(true))
    );

    let domain = doc.input_domain("age").unwrap();
    assert_eq!(domain.values, vec![TypedValue::Number(30.0)]);
}

#[test]
fn test_compiler_simple_sheet_json_shape() {
    let doc = compile_text(SIMPLE_SHEET);
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(
        value,
        json!({
            "data": {
                "inputs": [{ "key": "age", "values": [30] }],
                "testCases": [{
                    "inputs": { "age": 30 },
                    "results": [{ "outputs": { "approved": true }, "rowIndex": "1" }]
                }],
                "variables": []
            },
            "decisionId": "ABC",
            "dmnPath": ["dmns", "model.dmn"],
            "isActive": "true"
        })
    );
}

#[test]
fn test_compiler_one_case_per_row_with_sequential_indexes() {
    let doc = compile_text(LOAN_SHEET);

    assert_eq!(doc.test_cases().len(), 4);
    let indexes: Vec<_> = doc
        .test_cases()
        .iter()
        .map(|case| case.results[0].row_index.as_str())
        .collect();
    assert_eq!(indexes, vec!["1", "2", "3", "4"]);
    assert!(doc.test_cases().iter().all(|case| case.results.len() == 1));
}

#[test]
fn test_compiler_coerces_cells() {
    let doc = compile_text(LOAN_SHEET);
    let cases = doc.test_cases();

    assert_eq!(
        cases[0].results[0].outputs.get("note"),
        Some(&TypedValue::Text("ok, low risk".to_string()))
    );
    assert_eq!(
        cases[1].inputs.get("employment"),
        Some(&TypedValue::Text(String::new()))
    );
    assert_eq!(
        cases[1].results[0].outputs.get("note"),
        Some(&TypedValue::Text(String::new()))
    );
    assert_eq!(cases[3].inputs.get("age"), Some(&TypedValue::Number(42.5)));
    assert_eq!(
        cases[3].results[0].outputs.get("note"),
        Some(&TypedValue::Number(-2.0))
    );
}

#[test]
fn test_compiler_input_domains_are_distinct_and_ordered() {
    let doc = compile_text(LOAN_SHEET);

    let keys: Vec<_> = doc.data.inputs.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["age", "employment", "hasCollateral"]);

    assert_eq!(
        doc.input_domain("age").unwrap().values,
        vec![
            TypedValue::Number(30.0),
            TypedValue::Number(17.0),
            TypedValue::Number(42.5)
        ]
    );
    assert_eq!(
        doc.input_domain("employment").unwrap().values,
        vec![
            TypedValue::from("EMPLOYED"),
            TypedValue::from(""),
            TypedValue::from("RETIRED")
        ]
    );
    // `true` and `1` are different values
    assert_eq!(
        doc.input_domain("hasCollateral").unwrap().values,
        vec![
            TypedValue::Bool(true),
            TypedValue::Bool(false),
            TypedValue::Number(1.0)
        ]
    );
}

#[test]
fn test_compiler_duplicate_input_value_listed_once() {
    let text = "decisionId,D\ndmnFile,d.dmn\ninput:age,output:ok\n30,True\n30,False\n";
    let doc = compile_text(text);

    assert_eq!(doc.test_cases().len(), 2);
    assert_eq!(
        doc.input_domain("age").unwrap().values,
        vec![TypedValue::Number(30.0)]
    );
}

#[test]
fn test_compiler_ignores_unprefixed_columns() {
    let text = "decisionId,D\ndmnFile,d.dmn\ncomment,input:a,output:b\nhello,1,2\n";
    let doc = compile_text(text);

    let case = &doc.test_cases()[0];
    assert_eq!(case.inputs.keys().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(case.results[0].outputs.keys().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn test_compiler_without_rows() {
    let text = "decisionId,D\ndmnFile,d.dmn\ninput:a,output:b\n";
    let doc = compile_text(text);

    assert!(doc.test_cases().is_empty());
    assert!(doc.data.inputs.is_empty());
}

#[test]
fn test_compiler_with_custom_dmn_dir() {
    let compiler = Compiler::builder().with_dmn_dir("models/dmn").build();
    let doc = compiler.compile(&header("D", "d.dmn"), &[]);
    assert_eq!(doc.dmn_path, vec!["models/dmn".to_string(), "d.dmn".to_string()]);
}

#[test]
fn test_column_layout_classification() {
    let layout = ColumnLayout::classify(["input:x", "output:y", "other", "input:z"]);
    let inputs: Vec<_> = layout.inputs.iter().map(|c| c.key.as_str()).collect();
    let outputs: Vec<_> = layout.outputs.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(inputs, vec!["x", "z"]);
    assert_eq!(outputs, vec!["y"]);
    assert_eq!(layout.inputs[0].column, "input:x");
}

#[test]
fn test_document_json_round_trip() {
    let doc = compile_text(LOAN_SHEET);
    let json = doc.to_json_pretty().unwrap();

    // Pretty output uses two-space indentation
    assert!(json.starts_with("{\n  \"data\""));

    let back = ConfDocument::from_json(&json).unwrap();
    assert_eq!(back, doc);
}
