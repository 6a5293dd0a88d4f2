use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spendview_core::Classifier;
use spendview_ingest::{process_path, to_analysis_csv};
use std::fs;
use std::path::PathBuf;

mod report;

#[derive(Parser, Debug)]
#[command(name = "spendview", version, about = "Classify and explore a transaction CSV")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show spending by category and drill into single transactions
    Analyze {
        /// CSV with amount, account_name and timestamp columns
        csv: PathBuf,

        /// Extra merchant substrings on top of the built-in list
        #[arg(long = "merchant", value_name = "SUBSTRING")]
        merchants: Vec<String>,

        /// Extra contact substrings on top of the built-in list
        #[arg(long = "contact", value_name = "SUBSTRING")]
        contacts: Vec<String>,

        /// Currency symbol used in listings
        #[arg(long, default_value = "₹")]
        currency: String,

        /// Print the distribution and exit without prompting
        #[arg(long)]
        no_prompt: bool,
    },

    /// Write the classified table to an analysis CSV
    Export {
        /// CSV with amount, account_name and timestamp columns
        csv: PathBuf,

        /// Output path
        #[arg(long, default_value = "transaction_analysis.csv")]
        out: PathBuf,

        #[arg(long = "merchant", value_name = "SUBSTRING")]
        merchants: Vec<String>,

        #[arg(long = "contact", value_name = "SUBSTRING")]
        contacts: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            csv,
            merchants,
            contacts,
            currency,
            no_prompt,
        } => {
            if !csv.exists() {
                bail!("CSV not found: {}", csv.display());
            }
            let classifier = Classifier::with_extra(&merchants, &contacts);
            let table = process_path(&csv, &classifier)?;
            report::run(table, &currency, no_prompt)?;
        }

        Command::Export {
            csv,
            out,
            merchants,
            contacts,
        } => {
            if !csv.exists() {
                bail!("CSV not found: {}", csv.display());
            }
            let classifier = Classifier::with_extra(&merchants, &contacts);
            let table = process_path(&csv, &classifier)?;
            let data = to_analysis_csv(&table)?;
            fs::write(&out, data).with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {} ({} rows)", out.display(), table.len());
        }
    }

    Ok(())
}
