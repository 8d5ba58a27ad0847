use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while compiling a single CSV sheet into a conf document.
///
/// Every variant names the offending file. None of these abort a batch run; the
/// batch records them and moves on to the next sheet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Could not read '{}': {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("Malformed metadata header in '{}': {reason}", path.display())]
    MalformedHeader { path: PathBuf, reason: String },

    #[error("Failed to parse CSV body of '{}': {message}", path.display())]
    CsvParse { path: PathBuf, message: String },

    #[error("Failed to write conf document '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl CompileError {
    /// The file the error refers to. For `Write` this is the destination conf file.
    pub fn path(&self) -> &Path {
        match self {
            CompileError::Read { path, .. }
            | CompileError::MalformedHeader { path, .. }
            | CompileError::CsvParse { path, .. }
            | CompileError::Write { path, .. } => path,
        }
    }
}

/// Errors that abort a whole batch run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    #[error("Source directory '{}' could not be read: {message}", path.display())]
    Directory { path: PathBuf, message: String },
}
