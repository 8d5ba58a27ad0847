//! Common test utilities for building sheets on disk and in memory.
use kensa::prelude::*;
use std::fs;

/// The single-row sheet from the quick-start documentation.
#[allow(dead_code)]
pub const SIMPLE_SHEET: &str = "decisionId,ABC\n\
dmnFile,model.dmn\n\
input:age,output:approved\n\
30,True\n";

/// A multi-row sheet mixing every value kind, a quoted comma and blank cells.
#[allow(dead_code)]
pub const LOAN_SHEET: &str = "decisionId,loan-approval\n\
dmnFile,loans.dmn\n\
input:age,input:employment,input:hasCollateral,output:approved,output:note\n\
30,EMPLOYED,True,True,\"ok, low risk\"\n\
17,,False,False,\n\
30,RETIRED,True,True,senior\n\
42.5,EMPLOYED,1,False,-2\n";

/// Writes `content` to `dir/name` and returns the full path.
#[allow(dead_code)]
pub fn write_sheet(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test sheet");
    path
}

/// Builds a header for in-memory compilation tests.
#[allow(dead_code)]
pub fn header(decision_id: &str, dmn_file: &str) -> ConfHeader {
    ConfHeader {
        decision_id: decision_id.to_string(),
        dmn_file: dmn_file.to_string(),
    }
}

/// Parses header and rows from sheet text and compiles them with the default compiler.
#[allow(dead_code)]
pub fn compile_text(text: &str) -> ConfDocument {
    let origin = Path::new("inline.csv");
    let header = ConfHeader::from_text(text, origin).expect("Failed to read header");
    let rows = parse_rows_from_str(text, METADATA_LINES, origin).expect("Failed to parse rows");
    Compiler::default().compile(&header, &rows)
}
