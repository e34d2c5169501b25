//! Clean a raw vocabulary file

use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::vocab::clean::{CleanReport, clean_vocabulary};

pub fn run(input: Option<String>, output: PathBuf, format: OutputFormat, config: &Config) -> Result<()> {
    let vocabulary = super::load_vocabulary(input.as_deref(), config)?;
    let (cleaned, reports) = clean_vocabulary(&vocabulary);

    let output = Config::expand_path(&output);
    let json = serde_json::to_string_pretty(&cleaned).context("Failed to serialize vocabulary")?;
    fs::write(&output, json).with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Cleaned vocabulary written to {}", output.display());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Text => print_report(&reports, &output),
    }
    Ok(())
}

fn print_report(reports: &[CleanReport], output: &std::path::Path) {
    let width = reports.iter().map(|r| r.field.len()).max().unwrap_or(0);
    for report in reports {
        let removed = if report.removed() > 0 {
            format!("-{}", report.removed()).yellow().to_string()
        } else {
            "-0".dimmed().to_string()
        };
        println!(
            "  {:width$}  {:>5} → {:<5} {}",
            report.field,
            report.before,
            report.after,
            removed,
            width = width
        );
    }

    let before: usize = reports.iter().map(|r| r.before).sum();
    let after: usize = reports.iter().map(|r| r.after).sum();
    println!();
    println!(
        "{} {} ({} → {} labels)",
        "Saved".green(),
        output.display(),
        before,
        after
    );
}
