//! Line commands for the interactive session

use clap::ValueEnum;
use eyre::{Result, bail, eyre};
use std::path::PathBuf;

use super::Action;
use crate::persona::{Dimension, Field};
use crate::render::Format;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Action(Action),
    Preview,
    Copy,
    Download(Option<PathBuf>),
    Options { field: Field, search: Option<String> },
    Save(PathBuf),
    Load(PathBuf),
    Tone,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  toggle <field> <label>     select or deselect a label
  remove <field> <label>     remove a selected label
  set <field> <text>         set free text (decision_making_framework)
  dim <dimension> <0-100>    set a dimension
  format <markdown|json|yaml>
  options <field> [search]   list options for a field
  random                     randomize the persona
  clear                      reset every field and dimension
  preview                    show the rendered persona
  copy                       print the rendered persona
  download [dir]             save persona.<ext>
  save <file> / load <file>  store or restore the profile
  tone                       describe the tone of voice
  help, quit";

fn parse_field(name: &str) -> Result<Field> {
    Field::from_name(&name.replace('-', "_")).ok_or_else(|| eyre!("Unknown field: {}", name))
}

fn parse_dimension(name: &str) -> Result<Dimension> {
    Dimension::from_name(&name.replace('-', "_")).ok_or_else(|| eyre!("Unknown dimension: {}", name))
}

/// Split off the first word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

/// `<field> <rest of line>` with a non-empty rest
fn field_and_text<'a>(args: &'a str, verb: &str) -> Result<(Field, &'a str)> {
    let (name, rest) = split_word(args);
    if name.is_empty() || rest.is_empty() {
        bail!("Usage: {} <field> <label>", verb);
    }
    Ok((parse_field(name)?, rest))
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let (verb, args) = split_word(line);
    if verb.is_empty() {
        return Ok(None);
    }

    let command = match verb.to_lowercase().as_str() {
        "toggle" | "t" => {
            let (field, label) = field_and_text(args, "toggle")?;
            SessionCommand::Action(Action::Toggle {
                field,
                label: label.to_string(),
            })
        }
        "remove" | "rm" => {
            let (field, label) = field_and_text(args, "remove")?;
            SessionCommand::Action(Action::Remove {
                field,
                label: label.to_string(),
            })
        }
        "set" => {
            let (field, text) = field_and_text(args, "set")?;
            SessionCommand::Action(Action::SetText {
                field,
                text: text.to_string(),
            })
        }
        "dim" => {
            let (name, value) = split_word(args);
            if name.is_empty() || value.is_empty() {
                bail!("Usage: dim <dimension> <0-100>");
            }
            let dimension = parse_dimension(name)?;
            let value: u8 = value
                .parse()
                .map_err(|_| eyre!("Dimension value must be a number from 0 to 100, got '{}'", value))?;
            SessionCommand::Action(Action::SetDimension { dimension, value })
        }
        "format" => {
            let format = Format::from_str(args, true).map_err(|_| eyre!("Unknown format: '{}'", args))?;
            SessionCommand::Action(Action::SelectFormat(format))
        }
        "clear" => SessionCommand::Action(Action::Clear),
        "random" | "randomize" => SessionCommand::Action(Action::Randomize),
        "preview" | "show" => SessionCommand::Preview,
        "copy" => SessionCommand::Copy,
        "download" => SessionCommand::Download((!args.is_empty()).then(|| PathBuf::from(args))),
        "options" => {
            let (name, search) = split_word(args);
            if name.is_empty() {
                bail!("Usage: options <field> [search]");
            }
            SessionCommand::Options {
                field: parse_field(name)?,
                search: (!search.is_empty()).then(|| search.to_string()),
            }
        }
        "save" | "load" => {
            if args.is_empty() {
                bail!("Usage: {} <file>", verb);
            }
            let path = PathBuf::from(args);
            if verb.eq_ignore_ascii_case("save") {
                SessionCommand::Save(path)
            } else {
                SessionCommand::Load(path)
            }
        }
        "tone" => SessionCommand::Tone,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => bail!("Unknown command: '{}' (type 'help')", other),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_toggle_keeps_multiword_label() {
        assert_eq!(
            parse("toggle primary_traits  risk averse "),
            SessionCommand::Action(Action::Toggle {
                field: Field::PrimaryTraits,
                label: "risk averse".to_string()
            })
        );
        assert_eq!(
            parse("t core-values honesty"),
            SessionCommand::Action(Action::Toggle {
                field: Field::CoreValues,
                label: "honesty".to_string()
            })
        );
    }

    #[test]
    fn test_dimension_and_format() {
        assert_eq!(
            parse("dim serious_funny 85"),
            SessionCommand::Action(Action::SetDimension {
                dimension: Dimension::SeriousFunny,
                value: 85
            })
        );
        assert_eq!(parse("format YML"), SessionCommand::Action(Action::SelectFormat(Format::Yaml)));
        assert_eq!(parse("format md"), SessionCommand::Action(Action::SelectFormat(Format::Markdown)));
    }

    #[test]
    fn test_optional_arguments() {
        assert_eq!(parse("download"), SessionCommand::Download(None));
        assert_eq!(parse("download out"), SessionCommand::Download(Some(PathBuf::from("out"))));
        assert_eq!(
            parse("options work_style focus"),
            SessionCommand::Options {
                field: Field::WorkStyle,
                search: Some("focus".to_string())
            }
        );
        assert_eq!(
            parse("options blind_spots"),
            SessionCommand::Options {
                field: Field::BlindSpots,
                search: None
            }
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert!(parse_line("dance").is_err());
        assert!(parse_line("toggle favourite_color blue").is_err());
        assert!(parse_line("toggle primary_traits").is_err());
        assert!(parse_line("dim empathy lots").is_err());
        assert!(parse_line("dim empathy 300").is_err());
        assert!(parse_line("dim warmth 30").is_err());
        assert!(parse_line("format pdf").is_err());
        assert!(parse_line("save").is_err());
    }
}
