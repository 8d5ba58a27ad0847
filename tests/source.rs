//! Tests for reading metadata headers and CSV bodies from sheets.
mod common;
use common::*;
use kensa::prelude::*;

#[test]
fn test_header_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(dir.path(), "simple.csv", SIMPLE_SHEET);

    let header = ConfHeader::from_file(&path).expect("Failed to read header");
    assert_eq!(header.decision_id, "ABC");
    assert_eq!(header.dmn_file, "model.dmn");
}

#[test]
fn test_header_requires_two_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(dir.path(), "short.csv", "decisionId,ABC\n");

    match ConfHeader::from_file(&path) {
        Err(CompileError::MalformedHeader { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected MalformedHeader, got {:?}", other),
    }
}

#[test]
fn test_header_of_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfHeader::from_file(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(CompileError::Read { .. })));
}

#[test]
fn test_rows_skip_metadata_and_respect_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(dir.path(), "loans.csv", LOAN_SHEET);

    let rows = parse_rows(&path, METADATA_LINES).expect("Failed to parse rows");
    assert_eq!(rows.len(), 4);

    let first = &rows[0];
    assert_eq!(first.ordinal, 1);
    assert_eq!(
        first.columns().collect::<Vec<_>>(),
        vec![
            "input:age",
            "input:employment",
            "input:hasCollateral",
            "output:approved",
            "output:note"
        ]
    );
    assert_eq!(first.get("output:note"), Some("ok, low risk"));
    assert_eq!(rows[1].get("input:employment"), Some(""));
    assert_eq!(rows[3].ordinal, 4);
    assert_eq!(first.get("input:unknown"), None);
}

#[test]
fn test_rows_header_only_sheet_is_empty() {
    let text = "decisionId,X\ndmnFile,x.dmn\ninput:a,output:b\n";
    let rows = parse_rows_from_str(text, METADATA_LINES, Path::new("x.csv")).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_rows_with_wrong_field_count_fail() {
    let text = "decisionId,X\ndmnFile,x.dmn\ninput:a,output:b\n1,2\n1,2,3\n";
    match parse_rows_from_str(text, METADATA_LINES, Path::new("x.csv")) {
        Err(CompileError::CsvParse { message, .. }) => assert!(message.contains("data row 2")),
        other => panic!("Expected CsvParse, got {:?}", other),
    }
}

#[test]
fn test_rows_with_unbalanced_metadata_quotes_still_parse() {
    // Metadata lines are skipped as raw lines, never run through the CSV reader
    let text = "decisionId,\"ABC\ndmnFile,x.dmn\ninput:a,output:b\n1,2\n";
    let rows = parse_rows_from_str(text, METADATA_LINES, Path::new("x.csv")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("input:a"), Some("1"));
}

#[test]
fn test_rows_honor_custom_title_rows() {
    let text = "decisionId,X\ndmnFile,x.dmn\nauthor,qa-team\ninput:a,output:b\nTrue,False\n";
    let rows = parse_rows_from_str(text, 3, Path::new("x.csv")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("output:b"), Some("False"));
}
