use itertools::{Either, Itertools};

pub const INPUT_PREFIX: &str = "input:";
pub const OUTPUT_PREFIX: &str = "output:";

/// A CSV column that takes part in a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name as it appears in the CSV header.
    pub column: String,
    /// Name with its prefix stripped; the key used in the conf document.
    pub key: String,
}

/// The input and output columns of a sheet, each in CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub inputs: Vec<ColumnSpec>,
    pub outputs: Vec<ColumnSpec>,
}

impl ColumnLayout {
    /// Splits column names by their `input:`/`output:` prefix.
    /// Columns with neither prefix are not part of the layout.
    pub fn classify<'a>(columns: impl IntoIterator<Item = &'a str>) -> Self {
        let (inputs, outputs) = columns
            .into_iter()
            .filter_map(|column| {
                if let Some(key) = column.strip_prefix(INPUT_PREFIX) {
                    Some(Either::Left(ColumnSpec {
                        column: column.to_string(),
                        key: key.to_string(),
                    }))
                } else if let Some(key) = column.strip_prefix(OUTPUT_PREFIX) {
                    Some(Either::Right(ColumnSpec {
                        column: column.to_string(),
                        key: key.to_string(),
                    }))
                } else {
                    tracing::debug!(column, "Ignoring column without input/output prefix");
                    None
                }
            })
            .partition_map(|side| side);

        Self { inputs, outputs }
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}
