//! Render a stored profile

use colored::*;
use eyre::Result;
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::export::{ExportTarget, export};
use crate::persona::Profile;
use crate::persona::profile::load_profile;
use crate::render::{self, Format, RenderContext};

pub fn run(
    profile: Option<PathBuf>,
    format: Option<Format>,
    download: Option<Option<PathBuf>>,
    html: bool,
    config: &Config,
) -> Result<()> {
    let profile = match profile {
        Some(path) => load_profile(&Config::expand_path(&path))?,
        None => Profile::default(),
    };
    let format = format.unwrap_or(config.output.format);
    let ctx = RenderContext::now();

    if html {
        println!("{}", render::preview_html(&render::render(&profile, format, &ctx)));
        return Ok(());
    }

    let target = match download {
        Some(dir) => ExportTarget::Download {
            dir: super::download_dir(dir.as_deref(), config),
        },
        None => ExportTarget::Stdout,
    };

    if let Some(path) = export(&profile, format, &ctx, &target, &mut io::stdout())? {
        println!("{} {}", "Saved".green(), path.display());
    }
    Ok(())
}
