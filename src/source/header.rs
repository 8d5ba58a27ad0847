use crate::error::CompileError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of metadata lines that carry the header fields.
pub const METADATA_LINES: usize = 2;

/// The two metadata fields stored above the CSV table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfHeader {
    /// Line 1, second field.
    pub decision_id: String,
    /// Line 2, second field. A file name relative to the DMN directory.
    pub dmn_file: String,
}

impl ConfHeader {
    /// Reads the metadata header from the first two lines of a CSV sheet.
    ///
    /// The rest of the file is not read.
    pub fn from_file(path: &Path) -> Result<Self, CompileError> {
        let file = File::open(path).map_err(|e| CompileError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let lines = BufReader::new(file)
            .lines()
            .take(METADATA_LINES)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CompileError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_lines(&lines, path)
    }

    /// Parses the metadata header from in-memory sheet text. `origin` only labels errors.
    pub fn from_text(text: &str, origin: &Path) -> Result<Self, CompileError> {
        let lines: Vec<&str> = text.lines().take(METADATA_LINES).collect();
        Self::from_lines(&lines, origin)
    }

    fn from_lines<S: AsRef<str>>(lines: &[S], origin: &Path) -> Result<Self, CompileError> {
        if lines.len() < METADATA_LINES {
            return Err(CompileError::MalformedHeader {
                path: origin.to_path_buf(),
                reason: format!(
                    "expected {} metadata lines, found {}",
                    METADATA_LINES,
                    lines.len()
                ),
            });
        }

        let decision_id = second_field(lines[0].as_ref(), 1, origin)?;
        let dmn_file = second_field(lines[1].as_ref(), 2, origin)?;
        Ok(Self {
            decision_id,
            dmn_file,
        })
    }
}

/// Returns the trimmed second comma-separated field of a metadata line.
fn second_field(line: &str, line_no: usize, origin: &Path) -> Result<String, CompileError> {
    line.split(',')
        .nth(1)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| CompileError::MalformedHeader {
            path: origin.to_path_buf(),
            reason: format!("line {} has no value field: '{}'", line_no, line.trim_end()),
        })
}
