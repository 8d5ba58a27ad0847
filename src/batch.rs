use crate::compiler::{Compiler, DEFAULT_DMN_DIR};
use crate::conf::{ConfDocument, conf_file_name};
use crate::error::{BatchError, CompileError};
use crate::source::{ConfHeader, METADATA_LINES, parse_rows};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CSV_DIR: &str = "dmnCSV";
pub const DEFAULT_CONF_DIR: &str = "dmnConfigs";

/// Where a batch reads sheets from and writes conf documents to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory scanned for `*.csv` sheets.
    pub csv_dir: PathBuf,
    /// Directory conf documents are written into. Created if missing.
    pub conf_dir: PathBuf,
    /// First element of every `dmnPath`.
    pub dmn_dir: String,
    /// Lines skipped before the CSV column header. The first two are always
    /// read as the metadata header.
    pub title_rows: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            csv_dir: PathBuf::from(DEFAULT_CSV_DIR),
            conf_dir: PathBuf::from(DEFAULT_CONF_DIR),
            dmn_dir: DEFAULT_DMN_DIR.to_string(),
            title_rows: METADATA_LINES,
        }
    }
}

impl BatchConfig {
    pub fn builder(csv_dir: impl Into<PathBuf>, conf_dir: impl Into<PathBuf>) -> BatchConfigBuilder {
        BatchConfigBuilder::new(csv_dir, conf_dir)
    }

    /// The destination path of the conf document for a sheet.
    pub fn conf_path_for(&self, csv_path: &Path) -> PathBuf {
        let name = csv_path.file_name().unwrap_or(csv_path.as_os_str());
        self.conf_dir.join(conf_file_name(name))
    }

    fn compiler(&self) -> Compiler {
        Compiler::builder().with_dmn_dir(&self.dmn_dir).build()
    }
}

pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn new(csv_dir: impl Into<PathBuf>, conf_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: BatchConfig {
                csv_dir: csv_dir.into(),
                conf_dir: conf_dir.into(),
                ..BatchConfig::default()
            },
        }
    }

    pub fn with_dmn_dir(mut self, dmn_dir: impl Into<String>) -> Self {
        self.config.dmn_dir = dmn_dir.into();
        self
    }

    pub fn with_title_rows(mut self, title_rows: usize) -> Self {
        self.config.title_rows = title_rows;
        self
    }

    pub fn build(self) -> BatchConfig {
        self.config
    }
}

/// What happened to one sheet of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub source: PathBuf,
    /// The written conf path, or why the sheet was skipped.
    pub result: Result<PathBuf, CompileError>,
}

/// Per-sheet outcomes of a batch, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// `true` when every sheet compiled. An empty batch is clean.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Reads one sheet and compiles it, without writing anything.
pub fn compile_sheet(
    csv_path: &Path,
    title_rows: usize,
    compiler: &Compiler,
) -> Result<ConfDocument, CompileError> {
    let header = ConfHeader::from_file(csv_path)?;
    tracing::debug!(
        file = %csv_path.display(),
        decision_id = %header.decision_id,
        dmn_file = %header.dmn_file,
        "Read metadata header"
    );
    let rows = parse_rows(csv_path, title_rows)?;
    Ok(compiler.compile(&header, &rows))
}

/// Writes a conf document as 2-space indented JSON.
pub fn write_conf(document: &ConfDocument, dest: &Path) -> Result<(), CompileError> {
    let write_error = |message: String| CompileError::Write {
        path: dest.to_path_buf(),
        message,
    };

    let json = document
        .to_json_pretty()
        .map_err(|e| write_error(format!("serialization failed: {}", e)))?;
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }
    fs::write(dest, json).map_err(|e| write_error(e.to_string()))
}

/// Compiles one sheet and writes its conf document into `config.conf_dir`.
///
/// Returns the path of the written document.
pub fn compile_file(config: &BatchConfig, csv_path: &Path) -> Result<PathBuf, CompileError> {
    let document = compile_sheet(csv_path, config.title_rows, &config.compiler())?;
    let dest = config.conf_path_for(csv_path);
    write_conf(&document, &dest)?;
    tracing::info!(
        file = %csv_path.display(),
        conf = %dest.display(),
        test_cases = document.test_cases().len(),
        "Compiled sheet"
    );
    Ok(dest)
}

/// Lists the `.csv` files of a directory, sorted by file name.
pub fn list_sheets(csv_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let directory_error = |e: std::io::Error| BatchError::Directory {
        path: csv_dir.to_path_buf(),
        message: e.to_string(),
    };

    let mut sheets = Vec::new();
    for entry in fs::read_dir(csv_dir).map_err(directory_error)? {
        let path = entry.map_err(directory_error)?.path();
        let is_csv = path.extension().is_some_and(|ext| ext == "csv");
        if is_csv && path.is_file() {
            sheets.push(path);
        } else {
            tracing::debug!(file = %path.display(), "Skipping non-CSV entry");
        }
    }
    sheets.sort();
    Ok(sheets)
}

/// Compiles every sheet in `config.csv_dir`.
///
/// Sheets are processed one after another. A sheet that fails is logged and
/// recorded in the report, and the batch moves on. Only an unreadable source
/// directory fails the batch as a whole.
pub fn compile_directory(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let sheets = list_sheets(&config.csv_dir)?;
    tracing::info!(
        csv_dir = %config.csv_dir.display(),
        sheets = sheets.len(),
        "Starting batch"
    );

    let mut report = BatchReport::default();
    for source in sheets {
        let result = compile_file(config, &source);
        if let Err(e) = &result {
            tracing::warn!(file = %source.display(), error = %e, "Skipping sheet");
        }
        report.outcomes.push(FileOutcome { source, result });
    }

    tracing::info!(
        compiled = report.succeeded().count(),
        failed = report.failed().count(),
        "Batch finished"
    );
    Ok(report)
}
