//! List persona fields and dimensions

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::persona::{Category, Dimension, DimensionGroup, Field, FieldKind};

#[derive(Serialize)]
struct FieldInfo {
    name: &'static str,
    title: &'static str,
    kind: FieldKind,
    category: Category,
    groupable: bool,
}

#[derive(Serialize)]
struct DimensionInfo {
    name: &'static str,
    title: String,
    group: Option<DimensionGroup>,
    default: u8,
    low: &'static str,
    high: &'static str,
}

#[derive(Serialize)]
struct Catalog {
    fields: Vec<FieldInfo>,
    dimensions: Vec<DimensionInfo>,
}

fn catalog() -> Catalog {
    let fields = Field::ALL
        .iter()
        .map(|f| FieldInfo {
            name: f.name(),
            title: f.title(),
            kind: f.kind(),
            category: f.category(),
            groupable: f.groupable(),
        })
        .collect();

    let dimensions = Dimension::ALL
        .iter()
        .map(|d| {
            let (low, high) = d.poles();
            DimensionInfo {
                name: d.name(),
                title: d.title(),
                group: d.group(),
                default: d.default_value(),
                low,
                high,
            }
        })
        .collect();

    Catalog { fields, dimensions }
}

pub fn run(format: OutputFormat) -> Result<()> {
    let catalog = catalog();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&catalog)?),
        OutputFormat::Text => print_text(&catalog),
    }
    Ok(())
}

fn print_text(catalog: &Catalog) {
    println!("{} ({}):", "Fields".cyan(), format!("{}", catalog.fields.len()).dimmed());
    let width = catalog.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in &catalog.fields {
        let grouped = if field.groupable { " [grouped]".dimmed().to_string() } else { String::new() };
        println!(
            "  {:width$}  {:6}  {}{}",
            field.name.green(),
            field.kind.to_string(),
            field.title,
            grouped,
            width = width
        );
    }
    println!();

    println!("{} ({}):", "Dimensions".cyan(), format!("{}", catalog.dimensions.len()).dimmed());
    let width = catalog.dimensions.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for dimension in &catalog.dimensions {
        let group = dimension.group.map(|g| g.key()).unwrap_or("standalone");
        println!(
            "  {:width$}  {:3}  {}  {}",
            dimension.name.green(),
            dimension.default,
            dimension.title,
            format!("[{}]", group).dimmed(),
            width = width
        );
    }
}
