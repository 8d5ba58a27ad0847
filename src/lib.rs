//! # Kensa - DMN Test-Case Compiler
//!
//! **Kensa** turns CSV test-case sheets for DMN decision tables into typed JSON
//! test configurations ("conf" documents) that a DMN test runner can consume.
//!
//! ## Sheet Format
//!
//! A sheet is a CSV file with two metadata lines above a regular table:
//!
//! ```text
//! decisionId,loan-approval
//! dmnFile,loans.dmn
//! input:age,input:income,output:approved
//! 30,52000,True
//! 17,0,False
//! ```
//!
//! Columns prefixed `input:` become test-case inputs, columns prefixed `output:`
//! become expected outputs. Cells are coerced to booleans (`True`/`False`),
//! numbers, or strings.
//!
//! ## Core Workflow
//!
//! 1.  **Read**: `ConfHeader::from_file` reads the metadata lines and `parse_rows`
//!     reads the table below them.
//! 2.  **Compile**: `Compiler::compile` turns the rows into a `ConfDocument`, one
//!     test case per row, plus the distinct values seen for every input column.
//! 3.  **Write**: `compile_directory` runs both steps for every sheet of a
//!     directory and writes `<name>.conf` next to the other generated documents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kensa::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = BatchConfig::builder("dmnCSV", "dmnConfigs")
//!         .with_dmn_dir("dmns")
//!         .build();
//!
//!     let report = compile_directory(&config)?;
//!     for outcome in report.failed() {
//!         if let Err(e) = &outcome.result {
//!             println!("-> Skipped {}: {}", outcome.source.display(), e);
//!         }
//!     }
//!     println!("{} sheet(s) compiled", report.succeeded().count());
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod compiler;
pub mod conf;
pub mod error;
pub mod prelude;
pub mod source;
