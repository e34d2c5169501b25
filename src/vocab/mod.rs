//! Trait vocabulary: the candidate labels for every field
//!
//! The vocabulary is loaded once, from a file or over HTTP, and is read-only
//! afterwards. Fields it does not cover are skipped by every consumer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::persona::Field;

pub mod clean;
pub mod grouping;
pub mod layout;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch vocabulary from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("vocabulary is not a JSON object of label lists: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where to load the vocabulary from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    Path(PathBuf),
    Url(String),
}

impl VocabularySource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            VocabularySource::Url(source.to_string())
        } else {
            VocabularySource::Path(crate::config::Config::expand_path(Path::new(source)))
        }
    }
}

impl fmt::Display for VocabularySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularySource::Path(path) => write!(f, "{}", path.display()),
            VocabularySource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Field name → ordered candidate labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: IndexMap<String, Vec<String>>,
}

impl Vocabulary {
    pub fn from_entries(entries: IndexMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn load(source: &VocabularySource) -> Result<Self, VocabularyError> {
        let body = match source {
            VocabularySource::Path(path) => fs::read_to_string(path).map_err(|e| VocabularyError::Read {
                path: path.clone(),
                source: e,
            })?,
            VocabularySource::Url(url) => fetch(url)?,
        };

        let vocabulary = Self::from_json(&body)?;
        log::info!("Vocabulary loaded from {}: {} fields", source, vocabulary.len());
        Ok(vocabulary)
    }

    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Labels for a field, or `None` (with a warning) when the vocabulary lacks it
    pub fn labels(&self, field: Field) -> Option<&[String]> {
        match self.entries.get(field.name()) {
            Some(labels) => Some(labels.as_slice()),
            None => {
                log::warn!("No vocabulary for field: {}", field);
                None
            }
        }
    }

    pub fn contains(&self, field: Field, label: &str) -> bool {
        self.entries
            .get(field.name())
            .is_some_and(|labels| labels.iter().any(|l| l == label))
    }

    pub fn entries(&self) -> &IndexMap<String, Vec<String>> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fetch(url: &str) -> Result<String, VocabularyError> {
    let fetch_error = |message: String| VocabularyError::Fetch {
        url: url.to_string(),
        message,
    };

    // ureq reports non-2xx statuses as errors
    let mut response = ureq::get(url).call().map_err(|e| fetch_error(e.to_string()))?;
    response
        .body_mut()
        .read_to_string()
        .map_err(|e| fetch_error(e.to_string()))
}
