pub mod document;
pub mod value;

pub use document::*;
pub use value::*;

use std::path::Path;

/// Extension of generated conf documents.
pub const CONF_EXTENSION: &str = "conf";

/// Returns the conf file name belonging to a CSV sheet: `loans.csv` -> `loans.conf`.
///
/// Only the final `.csv` extension is replaced. A name without one gets `.conf` appended.
pub fn conf_file_name(csv_name: impl AsRef<Path>) -> String {
    let path = csv_name.as_ref();
    let has_csv_ext = path.extension().is_some_and(|ext| ext == "csv");
    let stem = if has_csv_ext {
        path.file_stem()
    } else {
        path.file_name()
    };
    format!(
        "{}.{}",
        stem.map(|s| s.to_string_lossy()).unwrap_or_default(),
        CONF_EXTENSION
    )
}
