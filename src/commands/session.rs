//! Interactive persona builder
//!
//! Reads one command per line, dispatches it against the builder and prints
//! the outcome. Errors are reported and the session carries on.

use colored::*;
use eyre::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::options::{layout_for, write_options};
use crate::builder::command::{HELP, SessionCommand, parse_line};
use crate::builder::{Action, Builder};
use crate::config::Config;
use crate::export::{ExportTarget, export};
use crate::persona::profile::{load_profile, save_profile};
use crate::persona::tone::preview_message;
use crate::persona::{Field, FieldKind};
use crate::render::{Format, RenderContext};

const PROMPT: &str = "persona> ";
const CLEAR_CONFIRM: &str = "Clear all personality parameters?";

pub fn run(vocab: Option<String>, format: Option<Format>, profile: Option<PathBuf>, config: &Config) -> Result<()> {
    let vocabulary = super::load_vocabulary(vocab.as_deref(), config)?;
    let mut builder = Builder::new(format.unwrap_or(config.output.format)).with_vocabulary(vocabulary);
    if let Some(path) = profile {
        builder = builder.with_profile(load_profile(&Config::expand_path(&path))?);
    }

    let stdin = io::stdin();
    let mut rng = StdRng::from_entropy();
    run_session(&mut builder, &mut stdin.lock(), &mut io::stdout(), &mut rng, config)
}

/// Drive a session until `quit` or end of input
pub fn run_session<R, W, G>(builder: &mut Builder, input: &mut R, out: &mut W, rng: &mut G, config: &Config) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let field_count = builder.vocabulary().map(|v| v.len()).unwrap_or(0);
    writeln!(
        out,
        "{} ({} fields loaded, format: {}). Type 'help' for commands.",
        "Persona Engine".bold(),
        field_count,
        builder.format()
    )?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{} {}", "error:".red(), e)?;
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }
        if let Err(e) = execute(builder, command, input, out, rng, config) {
            writeln!(out, "{} {:#}", "error:".red(), e)?;
        }
    }

    log::info!("Session ended");
    Ok(())
}

fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn show_field<W: Write>(builder: &Builder, field: Field, out: &mut W) -> Result<()> {
    let profile = builder.profile();
    if !profile.is_populated(field) {
        writeln!(out, "  {}: {}", field.title().cyan(), "(none)".dimmed())?;
        return Ok(());
    }
    let current = match field.kind() {
        FieldKind::Multi => profile
            .labels(field)
            .map(|labels| labels.iter().cloned().collect::<Vec<_>>().join(", "))
            .unwrap_or_default(),
        FieldKind::Single | FieldKind::Text => profile.scalar(field).unwrap_or_default().to_string(),
    };
    writeln!(out, "  {}: {}", field.title().cyan(), current)?;
    Ok(())
}

fn execute<R, W, G>(
    builder: &mut Builder,
    command: SessionCommand,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    config: &Config,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let ctx = RenderContext::now();

    match command {
        SessionCommand::Action(Action::Clear) => {
            if confirm(CLEAR_CONFIRM, input, out)? {
                builder.dispatch(Action::Clear, rng)?;
                writeln!(out, "{}", "Cleared.".green())?;
            } else {
                writeln!(out, "Cancelled.")?;
            }
        }
        SessionCommand::Action(action) => {
            let touched = match &action {
                Action::Toggle { field, .. } | Action::Remove { field, .. } | Action::SetText { field, .. } => {
                    Some(*field)
                }
                _ => None,
            };
            let summary = match &action {
                Action::SetDimension { dimension, value } => {
                    Some(format!("{} = {} ({})", dimension.title(), value, dimension.label(*value)))
                }
                Action::SelectFormat(format) => Some(format!("Format: {}", format)),
                Action::Randomize => Some("Randomized persona.".to_string()),
                _ => None,
            };

            builder.dispatch(action, rng)?;

            if let Some(field) = touched {
                show_field(builder, field, out)?;
            }
            if let Some(summary) = summary {
                writeln!(out, "  {}", summary.green())?;
            }
        }
        SessionCommand::Preview => {
            export(builder.profile(), builder.format(), &ctx, &ExportTarget::Stdout, out)?;
        }
        SessionCommand::Copy => {
            export(builder.profile(), builder.format(), &ctx, &ExportTarget::Stdout, out)?;
            writeln!(out, "{}", "Copied to stdout.".green())?;
        }
        SessionCommand::Download(dir) => {
            let dir = super::download_dir(dir.as_deref(), config);
            let target = ExportTarget::Download { dir };
            if let Some(path) = export(builder.profile(), builder.format(), &ctx, &target, out)? {
                writeln!(out, "{} {}", "Saved".green(), path.display())?;
            }
        }
        SessionCommand::Options { field, search } => {
            let layout = builder
                .vocabulary()
                .and_then(|v| layout_for(field, v, search.as_deref(), false));
            match layout {
                Some(layout) => write_options(out, field, &layout, builder.profile())?,
                None => writeln!(out, "  {}", format!("No options for {}", field).dimmed())?,
            }
        }
        SessionCommand::Save(path) => {
            let path = Config::expand_path(&path);
            save_profile(builder.profile(), &path)?;
            writeln!(out, "{} {}", "Saved".green(), path.display())?;
        }
        SessionCommand::Load(path) => {
            let profile = load_profile(&Config::expand_path(&path))?;
            builder.set_profile(profile);
            writeln!(out, "{} {}", "Loaded".green(), path.display())?;
        }
        SessionCommand::Tone => writeln!(out, "  \"{}\"", preview_message(builder.profile()))?,
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
        SessionCommand::Quit => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Dimension;
    use crate::vocab::Vocabulary;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn builder() -> Builder {
        let vocabulary = Vocabulary::from_json(
            r#"{
                "primary_traits": ["bold", "calm", "curious"],
                "cognitive_style": ["analytical", "intuitive"]
            }"#,
        )
        .unwrap();
        Builder::new(Format::Markdown).with_vocabulary(vocabulary)
    }

    fn drive(builder: &mut Builder, script: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        run_session(builder, &mut input, &mut out, &mut rng, &Config::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_toggle_and_preview() {
        let mut builder = builder();
        let out = drive(
            &mut builder,
            "toggle primary_traits bold\ntoggle cognitive_style analytical\ndim empathy 90\npreview\nquit\n",
        );
        assert!(out.contains("Primary Traits: bold"));
        assert!(out.contains("Empathy = 90 (High)"));
        assert!(out.contains("# AI Agent Persona"));
        assert!(out.contains("### Cognitive Style\nanalytical"));
        assert_eq!(builder.profile().dimension(Dimension::Empathy), 90);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut builder = builder();
        let out = drive(&mut builder, "toggle primary_traits grumpy\nwhatever\ntoggle primary_traits calm\n");
        assert!(out.contains("error: 'grumpy' is not an option for primary_traits"));
        assert!(out.contains("error: Unknown command"));
        assert!(builder.profile().is_selected(Field::PrimaryTraits, "calm"));
    }

    #[test]
    fn test_deselect_shows_empty_field() {
        let mut builder = builder();
        let out = drive(&mut builder, "toggle primary_traits bold\ntoggle primary_traits bold\n");
        assert!(out.contains("Primary Traits: bold"));
        assert!(out.contains("Primary Traits: (none)"));
        assert!(!builder.profile().is_populated(Field::PrimaryTraits));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut builder = builder();
        drive(&mut builder, "toggle primary_traits bold\nclear\nn\n");
        assert!(builder.profile().is_populated(Field::PrimaryTraits));

        let out = drive(&mut builder, "clear\ny\n");
        assert!(out.contains("Clear all personality parameters? [y/N]"));
        assert!(!builder.profile().is_populated(Field::PrimaryTraits));
    }

    #[test]
    fn test_download_and_format() {
        let temp = TempDir::new().unwrap();
        let mut builder = builder();
        let script = format!("format json\ndownload {}\n", temp.path().display());
        let out = drive(&mut builder, &script);

        let path = temp.path().join("persona.json");
        assert!(out.contains(&format!("Saved {}", path.display())));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("\"generated_by\": \"Persona Engine\""));
    }

    #[test]
    fn test_random_and_save_load() {
        let temp = TempDir::new().unwrap();
        let saved = temp.path().join("me.yaml");
        let mut builder = builder();
        drive(&mut builder, &format!("random\nsave {}\n", saved.display()));
        let randomized = builder.profile().clone();
        assert!(randomized.is_populated(Field::PrimaryTraits));

        let mut other = self::builder();
        drive(&mut other, &format!("load {}\n", saved.display()));
        assert_eq!(other.profile(), &randomized);
    }
}
