//! Randomize a persona

use colored::*;
use eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

use crate::builder::{Action, Builder};
use crate::config::Config;
use crate::export::{ExportTarget, export};
use crate::persona::profile::save_profile;
use crate::render::{Format, RenderContext};

pub fn run(
    vocab: Option<String>,
    format: Option<Format>,
    seed: Option<u64>,
    download: Option<Option<PathBuf>>,
    save: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let vocabulary = super::load_vocabulary(vocab.as_deref(), config)?;
    let mut builder = Builder::new(format.unwrap_or(config.output.format)).with_vocabulary(vocabulary);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    builder.dispatch(Action::Randomize, &mut rng)?;

    if let Some(path) = save {
        save_profile(builder.profile(), &Config::expand_path(&path))?;
    }

    let target = match download {
        Some(dir) => ExportTarget::Download {
            dir: super::download_dir(dir.as_deref(), config),
        },
        None => ExportTarget::Stdout,
    };

    let ctx = RenderContext::now();
    if let Some(path) = export(builder.profile(), builder.format(), &ctx, &target, &mut io::stdout())? {
        println!("{} {}", "Saved".green(), path.display());
    }
    Ok(())
}
