use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate sample test-case sheets for the Kensa compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated CSV sheet to
    #[arg(short, long, default_value = "generated_sheet.csv")]
    output: String,

    /// Value written to the decisionId metadata line
    #[arg(long, default_value = "loan-approval")]
    decision_id: String,

    /// Value written to the dmnFile metadata line
    #[arg(long, default_value = "loan-approval.dmn")]
    dmn_file: String,

    /// The number of data rows to generate
    #[arg(long, default_value_t = 20)]
    rows: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating test-case sheet with {} row(s)...", cli.rows);

    let mut sheet = String::new();
    sheet.push_str(&format!("decisionId,{}\n", cli.decision_id));
    sheet.push_str(&format!("dmnFile,{}\n", cli.dmn_file));
    sheet.push_str("input:age,input:income,input:employment,input:hasCollateral,output:approved,output:rate\n");

    for _ in 0..cli.rows {
        sheet.push_str(&generate_row(&mut rng));
        sheet.push('\n');
    }

    fs::write(&cli.output, sheet)?;

    println!(
        "Successfully generated and saved test sheet to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates one data row. Outputs follow a simple approval rule so the sheet reads sensibly.
fn generate_row(rng: &mut ThreadRng) -> String {
    let age: u32 = rng.random_range(16..80);
    let income: u32 = rng.random_range(0..20) * 5_000;
    let employment = ["EMPLOYED", "SELF-EMPLOYED", "UNEMPLOYED", "RETIRED"]
        [rng.random_range(0..4usize)];
    let has_collateral = rng.random_bool(0.4);
    // Leave some inputs blank to exercise empty-cell handling
    let income_cell = if rng.random_bool(0.1) {
        String::new()
    } else {
        income.to_string()
    };

    let approved = age >= 18 && (income >= 30_000 || has_collateral);
    let rate = if approved {
        format!("{:.2}", rng.random_range(2.5..9.0))
    } else {
        String::new()
    };

    format!(
        "{},{},\"{}\",{},{},{}",
        age,
        income_cell,
        employment,
        sheet_bool(has_collateral),
        sheet_bool(approved),
        rate
    )
}

fn sheet_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}
