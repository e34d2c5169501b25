//! Copy and download of rendered personas

use eyre::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::persona::Profile;
use crate::render::{self, Format, RenderContext};

/// Where an export goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Written to the given writer (stdout for "copy")
    Stdout,
    /// Saved as `persona.<ext>` in a directory
    Download { dir: PathBuf },
}

/// Render the profile and send it to the target.
///
/// Returns the written file path for downloads.
pub fn export<W: Write>(
    profile: &Profile,
    format: Format,
    ctx: &RenderContext,
    target: &ExportTarget,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    let text = render::render(profile, format, ctx);
    match target {
        ExportTarget::Stdout => {
            out.write_all(text.as_bytes()).context("Failed to write persona")?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
            out.flush()?;
            Ok(None)
        }
        ExportTarget::Download { dir } => download(&text, format, dir).map(Some),
    }
}

/// Write rendered text to `<dir>/persona.<ext>`
pub fn download(text: &str, format: Format, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    let path = dir.join(format.download_filename());
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Downloaded persona to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Field;
    use tempfile::TempDir;

    #[test]
    fn test_copy_writes_rendered_text() {
        let mut profile = Profile::default();
        profile.toggle(Field::PrimaryTraits, "bold").unwrap();

        let mut out = Vec::new();
        let written = export(&profile, Format::Markdown, &RenderContext::now(), &ExportTarget::Stdout, &mut out).unwrap();
        assert!(written.is_none());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# AI Agent Persona"));
        assert!(text.contains("- bold"));
    }

    #[test]
    fn test_download_uses_format_filename() {
        let temp = TempDir::new().unwrap();
        let target = ExportTarget::Download {
            dir: temp.path().join("out"),
        };

        let mut out = Vec::new();
        let path = export(&Profile::default(), Format::Yaml, &RenderContext::now(), &target, &mut out)
            .unwrap()
            .unwrap();
        assert_eq!(path, temp.path().join("out").join("persona.yaml"));
        assert!(out.is_empty());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# AI Agent Persona\n# Generated by Persona Engine"));
    }
}
