use crate::error::CompileError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// One named cell of a data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Full column name, including its `input:`/`output:` prefix.
    pub column: String,
    pub value: String,
}

/// One data row of a CSV sheet, cells in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position among the data rows.
    pub ordinal: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(ordinal: usize, cells: Vec<Cell>) -> Self {
        Self { ordinal, cells }
    }

    /// Returns the raw text of a column, `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.column == column)
            .map(|cell| cell.value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.column.as_str())
    }
}

/// Parses the tabular body of a CSV sheet.
///
/// The first `title_rows` lines are skipped without being interpreted; the next
/// line is the column header. Records must have as many fields as the header.
pub fn parse_rows(path: &Path, title_rows: usize) -> Result<Vec<Row>, CompileError> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let mut reader = BufReader::new(file);
    skip_lines(&mut reader, title_rows).map_err(|e| read_error(path, e))?;
    parse_table(reader, path)
}

/// Same as [`parse_rows`] for in-memory sheet text. `origin` only labels errors.
pub fn parse_rows_from_str(
    text: &str,
    title_rows: usize,
    origin: &Path,
) -> Result<Vec<Row>, CompileError> {
    let mut reader = text.as_bytes();
    skip_lines(&mut reader, title_rows).map_err(|e| read_error(origin, e))?;
    parse_table(reader, origin)
}

/// Consumes up to `count` lines. Returns how many were actually present.
fn skip_lines<R: BufRead>(reader: &mut R, count: usize) -> io::Result<usize> {
    let mut discarded = Vec::new();
    for skipped in 0..count {
        discarded.clear();
        if reader.read_until(b'\n', &mut discarded)? == 0 {
            return Ok(skipped);
        }
    }
    Ok(count)
}

fn parse_table<R: Read>(source: R, origin: &Path) -> Result<Vec<Row>, CompileError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(false)
        .trim(Trim::None)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(origin, format!("failed to read column header: {}", e)))?
        .clone();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| csv_error(origin, format!("data row {}: {}", index + 1, e)))?;
        rows.push(build_row(index + 1, &headers, &record));
    }

    tracing::debug!(
        file = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        "Parsed CSV body"
    );
    Ok(rows)
}

fn build_row(ordinal: usize, headers: &StringRecord, record: &StringRecord) -> Row {
    let cells = headers
        .iter()
        .enumerate()
        .map(|(idx, column)| Cell {
            column: column.to_string(),
            value: record.get(idx).unwrap_or("").to_string(),
        })
        .collect();
    Row::new(ordinal, cells)
}

fn read_error(path: &Path, e: io::Error) -> CompileError {
    CompileError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn csv_error(path: &Path, message: String) -> CompileError {
    CompileError::CsvParse {
        path: path.to_path_buf(),
        message,
    }
}
