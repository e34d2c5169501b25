pub mod clean;
pub mod completions;
pub mod fields;
pub mod index;
pub mod options;
pub mod random;
pub mod render;
pub mod session;

use eyre::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::vocab::{Vocabulary, VocabularySource};

/// Load the vocabulary from a CLI override or the configured source
pub(crate) fn load_vocabulary(source: Option<&str>, config: &Config) -> Result<Vocabulary> {
    let source = VocabularySource::parse(source.unwrap_or(&config.vocabulary.source));
    Vocabulary::load(&source).with_context(|| format!("Failed to load trait data from {}", source))
}

/// Download directory from `--download [DIR]`, falling back to config
pub(crate) fn download_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    Config::expand_path(flag.unwrap_or(&config.output.download_dir))
}
