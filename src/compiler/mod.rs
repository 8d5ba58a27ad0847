use crate::conf::{ColumnMap, ConfDocument, InputDomain, TestCase, TestResult, TypedValue};
use crate::source::{ConfHeader, Row};
use ahash::AHashSet;

pub mod columns;

pub use columns::{ColumnLayout, ColumnSpec, INPUT_PREFIX, OUTPUT_PREFIX};

/// Default directory that `dmnPath` points into.
pub const DEFAULT_DMN_DIR: &str = "dmns";

/// Turns parsed CSV rows into a conf document. Performs no I/O.
#[derive(Debug, Clone)]
pub struct Compiler {
    dmn_dir: String,
}

pub struct CompilerBuilder {
    dmn_dir: String,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            dmn_dir: DEFAULT_DMN_DIR.to_string(),
        }
    }

    /// Sets the directory written as the first element of `dmnPath`.
    pub fn with_dmn_dir(mut self, dmn_dir: impl Into<String>) -> Self {
        self.dmn_dir = dmn_dir.into();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            dmn_dir: self.dmn_dir,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        CompilerBuilder::new().build()
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn dmn_dir(&self) -> &str {
        &self.dmn_dir
    }

    /// Compiles the rows of one sheet into its conf document.
    ///
    /// The column layout is taken from the first row; every row of a sheet shares
    /// the same header, so the remaining rows follow it. Each row becomes one test
    /// case whose `rowIndex` is the row's 1-based position.
    pub fn compile(&self, header: &ConfHeader, rows: &[Row]) -> ConfDocument {
        let layout = rows
            .first()
            .map(|row| ColumnLayout::classify(row.columns()))
            .unwrap_or_default();

        let mut domains = DomainCollector::new(&layout.inputs);
        let mut test_cases = Vec::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            let inputs = Self::typed_cells(row, &layout.inputs);
            domains.observe(&inputs);

            let outputs = Self::typed_cells(row, &layout.outputs);
            test_cases.push(TestCase {
                inputs,
                results: vec![TestResult {
                    outputs,
                    row_index: (position + 1).to_string(),
                }],
            });
        }

        ConfDocument::new(header, &self.dmn_dir, domains.finish(), test_cases)
    }

    fn typed_cells(row: &Row, specs: &[ColumnSpec]) -> ColumnMap {
        let mut cells = ColumnMap::with_capacity(specs.len());
        for spec in specs {
            cells.insert(spec.key.as_str(), TypedValue::coerce_cell(row.get(&spec.column)));
        }
        cells
    }
}

/// Accumulates the distinct values of every input column in first-seen order.
struct DomainCollector {
    domains: Vec<(InputDomain, AHashSet<TypedValue>)>,
}

impl DomainCollector {
    fn new(inputs: &[ColumnSpec]) -> Self {
        let mut domains: Vec<(InputDomain, AHashSet<TypedValue>)> = Vec::new();
        for spec in inputs {
            // A repeated key collapses into one domain, like the per-row mapping does.
            if domains.iter().any(|(d, _)| d.key == spec.key) {
                continue;
            }
            domains.push((
                InputDomain {
                    key: spec.key.clone(),
                    values: Vec::new(),
                },
                AHashSet::new(),
            ));
        }
        Self { domains }
    }

    fn observe(&mut self, inputs: &ColumnMap) {
        for (domain, seen) in &mut self.domains {
            let Some(value) = inputs.get(&domain.key) else {
                continue;
            };
            if seen.insert(value.clone()) {
                domain.values.push(value.clone());
            }
        }
    }

    fn finish(self) -> Vec<InputDomain> {
        self.domains.into_iter().map(|(domain, _)| domain).collect()
    }
}
