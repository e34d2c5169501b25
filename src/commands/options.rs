//! Show a field's selectable options

use colored::*;
use eyre::{Result, eyre};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use terminal_size::{Width, terminal_size};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::persona::profile::load_profile;
use crate::persona::{Field, FieldKind, Profile};
use crate::vocab::Vocabulary;
use crate::vocab::layout::{OptionBlock, OptionLayout, render_options};

#[derive(Serialize)]
struct OptionsView<'a> {
    field: &'a str,
    kind: FieldKind,
    grouped: bool,
    blocks: Vec<OptionBlock>,
    hidden: usize,
}

pub fn run(
    field: &str,
    vocab: Option<String>,
    profile: Option<PathBuf>,
    search: Option<String>,
    all: bool,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let field = Field::from_name(&field.replace('-', "_")).ok_or_else(|| eyre!("Unknown field: {}", field))?;
    let vocabulary = super::load_vocabulary(vocab.as_deref(), config)?;
    let profile = match profile {
        Some(path) => load_profile(&Config::expand_path(&path))?,
        None => Profile::default(),
    };

    let Some(layout) = layout_for(field, &vocabulary, search.as_deref(), all) else {
        eyre::bail!("The vocabulary has no options for {}", field);
    };

    match format {
        OutputFormat::Text => write_options(&mut io::stdout(), field, &layout, &profile)?,
        OutputFormat::Json | OutputFormat::Yaml => {
            let view = OptionsView {
                field: field.name(),
                kind: field.kind(),
                grouped: layout.is_grouped(),
                blocks: render_options(&layout, &profile, field),
                hidden: hidden_count(&layout),
            };
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", serde_yaml::to_string(&view)?);
            }
        }
    }
    Ok(())
}

/// Layout for a field after search and "show all" are applied
pub(crate) fn layout_for(field: Field, vocabulary: &Vocabulary, search: Option<&str>, all: bool) -> Option<OptionLayout> {
    let labels = vocabulary.labels(field)?;
    let mut layout = OptionLayout::for_field(field, labels);
    if all {
        layout = layout.show_all();
    }
    if let Some(term) = search {
        layout = layout.filter(term);
    }
    Some(layout)
}

fn hidden_count(layout: &OptionLayout) -> usize {
    match layout {
        OptionLayout::Paged { hidden, .. } => hidden.len(),
        OptionLayout::Grouped { .. } => 0,
    }
}

fn get_terminal_width() -> usize {
    terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(80)
}

/// Lay out option labels in rows no wider than the terminal
fn wrap_options(options: &[String], indent: usize, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for option in options {
        let len = option.chars().count();
        if current_len > 0 && indent + current_len + 2 + len > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push_str("  ");
            current_len += 2;
        }
        current.push_str(option);
        current_len += len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn marked(block: &OptionBlock) -> Vec<String> {
    block
        .options
        .iter()
        .map(|o| {
            if o.selected {
                format!("[x] {}", o.label).green().to_string()
            } else {
                format!("[ ] {}", o.label)
            }
        })
        .collect()
}

/// Print the options of a field with selection markers
pub(crate) fn write_options<W: Write>(out: &mut W, field: Field, layout: &OptionLayout, profile: &Profile) -> Result<()> {
    let width = get_terminal_width();
    let blocks = render_options(layout, profile, field);

    writeln!(out, "{} {}", field.title().bold(), format!("({})", field.kind()).dimmed())?;

    for block in &blocks {
        if block.options.is_empty() {
            continue;
        }
        match &block.heading {
            Some(root) => {
                let selected = block.options.iter().filter(|o| o.selected).count();
                let badge = if selected > 0 {
                    format!(" {} selected", selected).green().to_string()
                } else {
                    String::new()
                };
                let arrow = if block.expanded { "▾" } else { "▸" };
                writeln!(
                    out,
                    "  {} {} {}{}",
                    arrow,
                    root.cyan(),
                    format!("({})", block.options.len()).dimmed(),
                    badge
                )?;
                if block.expanded {
                    for line in wrap_options(&marked(block), 6, width) {
                        writeln!(out, "      {}", line)?;
                    }
                }
            }
            None => {
                for line in wrap_options(&marked(block), 2, width) {
                    writeln!(out, "  {}", line)?;
                }
            }
        }
    }

    let hidden = hidden_count(layout);
    if hidden > 0 {
        writeln!(out, "  {}", format!("… {} more (show all with --all)", hidden).dimmed())?;
    }
    if blocks.iter().all(|b| b.options.is_empty()) {
        writeln!(out, "  {}", "(no matching options)".dimmed())?;
    }
    Ok(())
}
