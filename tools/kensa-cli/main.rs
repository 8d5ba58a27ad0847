use clap::{Parser, Subcommand};
use kensa::batch::{DEFAULT_CONF_DIR, DEFAULT_CSV_DIR};
use kensa::compiler::DEFAULT_DMN_DIR;
use kensa::prelude::*;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Compiles DMN test-case CSV sheets into JSON conf documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log every pipeline stage (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile every sheet of a directory and write the conf documents
    Compile {
        /// Directory holding the CSV sheets
        #[arg(long, default_value = DEFAULT_CSV_DIR)]
        csv_dir: PathBuf,
        /// Directory the conf documents are written to
        #[arg(long, default_value = DEFAULT_CONF_DIR)]
        conf_dir: PathBuf,
        /// Directory the referenced DMN models live in
        #[arg(long, default_value = DEFAULT_DMN_DIR)]
        dmn_dir: String,
        /// Lines above the CSV column header
        #[arg(long, default_value_t = METADATA_LINES)]
        title_rows: usize,
        /// Exit with code 2 if any sheet was skipped
        #[arg(long)]
        strict: bool,
    },
    /// Compile a single sheet and print its conf document without writing it
    Inspect {
        /// Path to the CSV sheet
        sheet: PathBuf,
        /// Directory the referenced DMN models live in
        #[arg(long, default_value = DEFAULT_DMN_DIR)]
        dmn_dir: String,
        /// Lines above the CSV column header
        #[arg(long, default_value_t = METADATA_LINES)]
        title_rows: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compile {
            csv_dir,
            conf_dir,
            dmn_dir,
            title_rows,
            strict,
        } => {
            let config = BatchConfig::builder(csv_dir, conf_dir)
                .with_dmn_dir(dmn_dir)
                .with_title_rows(title_rows)
                .build();
            run_compile(&config, strict)
        }
        Command::Inspect {
            sheet,
            dmn_dir,
            title_rows,
        } => run_inspect(&sheet, dmn_dir, title_rows),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_compile(config: &BatchConfig, strict: bool) -> ExitCode {
    let start = Instant::now();
    let report = match compile_directory(config) {
        Ok(report) => report,
        Err(e) => return exit_with_error(&e.to_string()),
    };
    let duration = start.elapsed();

    println!("\n--- Batch Summary ---");
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(conf) => println!(
                "  -> {} => {}",
                outcome.source.display(),
                conf.display()
            ),
            Err(e) => println!("  -> {} SKIPPED: {}", outcome.source.display(), e),
        }
    }
    println!("-----------------------------");
    println!("Sheets found:   {}", report.len());
    println!("Compiled:       {}", report.succeeded().count());
    println!("Skipped:        {}", report.failed().count());
    println!("Total time:     {:?}", duration);
    println!();

    if strict && !report.is_clean() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_inspect(sheet: &Path, dmn_dir: String, title_rows: usize) -> ExitCode {
    let compiler = Compiler::builder().with_dmn_dir(dmn_dir).build();
    let document = match compile_sheet(sheet, title_rows, &compiler) {
        Ok(document) => document,
        Err(e) => return exit_with_error(&e.to_string()),
    };
    match document.to_json_pretty() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => exit_with_error(&format!("Failed to render conf document: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ExitCode {
    eprintln!("\nError: {}", message);
    ExitCode::FAILURE
}
