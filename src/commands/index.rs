//! Build the trait index

use chrono::Utc;
use colored::*;
use eyre::Result;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::indexer::{self, TraitIndex};

pub fn run(input: Option<PathBuf>, output: Option<PathBuf>, format: OutputFormat, config: &Config) -> Result<()> {
    let input = Config::expand_path(input.as_ref().unwrap_or(&config.indexer.input));
    let output = Config::expand_path(output.as_ref().unwrap_or(&config.indexer.output));

    let index = indexer::run(&input, &output, Utc::now())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&index.metadata)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&index.metadata)?),
        OutputFormat::Text => print_summary(&index, &output),
    }
    Ok(())
}

fn print_summary(index: &TraitIndex, output: &std::path::Path) {
    println!(
        "{} {} ({} profiles)",
        "Trait index created:".green(),
        output.display(),
        index.metadata.total_profiles
    );
    println!(
        "  Indexed {} domains and {} archetypes",
        index.metadata.domains, index.metadata.archetypes
    );

    if let Some((domain, categories)) = index.domain.first() {
        println!();
        println!("Sample domain {}:", domain.cyan());
        for (category, traits) in categories {
            let top: Vec<&str> = traits.iter().take(5).map(String::as_str).collect();
            println!(
                "  {}: {} traits {}",
                category,
                traits.len(),
                format!("(top 5: {})", top.join(", ")).dimmed()
            );
        }
    }
}
