//! Trait index over a corpus of profile records
//!
//! For every domain and archetype, counts how often each trait appears in a
//! fixed set of categories and lists the traits most frequent first.

use chrono::{DateTime, SecondsFormat, Utc};
use eyre::{Context, Result, bail};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Indexed categories and where they live in a profile record
pub const CATEGORIES: &[(&str, &str)] = &[
    ("primary_traits", "psychological_profile.primary_traits"),
    ("core_motivations", "psychological_profile.core_motivations"),
    ("cognitive_style", "psychological_profile.cognitive_style"),
    ("communication_tone", "communication_style.tone"),
    ("communication_sentence_structure", "communication_style.sentence_structure"),
    ("work_style", "behavioral_patterns.work_style"),
    ("problem_solving_approach", "behavioral_patterns.problem_solving_approach"),
    ("learning_style", "learning.learning_style"),
    ("core_values", "values.core_values"),
    ("leadership_style", "collaboration.leadership_style"),
    ("stress_responses", "behavioral_patterns.stress_responses"),
    ("blind_spots", "psychological_profile.blind_spots"),
];

/// grouping key → category → traits, most frequent first
pub type CategoryIndex = IndexMap<String, IndexMap<String, Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetadata {
    pub total_profiles: usize,
    pub domains: usize,
    pub archetypes: usize,
    pub generated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitIndex {
    pub domain: CategoryIndex,
    pub archetype: CategoryIndex,
    pub metadata: IndexMetadata,
}

/// Follow a dotted path through nested objects
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(record, |current, segment| current.get(segment))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Traits from a category value: arrays element-wise, strings split on commas
pub fn normalize_traits(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    raw.into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Domain or archetype of a record, if it has a usable one
fn grouping_key(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(scalar_text).filter(|k| !k.trim().is_empty())
}

type Counters = IndexMap<String, IndexMap<String, IndexMap<String, usize>>>;

fn count(counters: &mut Counters, key: &str, category: &str, trait_: &str) {
    *counters
        .entry(key.to_string())
        .or_default()
        .entry(category.to_string())
        .or_default()
        .entry(trait_.to_string())
        .or_insert(0) += 1;
}

fn sorted(counters: Counters) -> CategoryIndex {
    counters
        .into_iter()
        .map(|(key, categories)| {
            let categories = categories
                .into_iter()
                .map(|(category, counts)| {
                    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
                    // Stable: ties keep first-seen order
                    entries.sort_by(|a, b| b.1.cmp(&a.1));
                    (category, entries.into_iter().map(|(t, _)| t).collect())
                })
                .collect();
            (key, categories)
        })
        .collect()
}

pub fn build_index(records: &[Value], generated: DateTime<Utc>) -> TraitIndex {
    let mut domains = Counters::new();
    let mut archetypes = Counters::new();

    for record in records {
        let domain = grouping_key(record, "domain");
        let archetype = grouping_key(record, "archetype");
        if domain.is_none() && archetype.is_none() {
            continue;
        }

        for (category, path) in CATEGORIES {
            let Some(value) = resolve_path(record, path) else {
                continue;
            };
            for trait_ in normalize_traits(value) {
                if let Some(domain) = &domain {
                    count(&mut domains, domain, category, &trait_);
                }
                if let Some(archetype) = &archetype {
                    count(&mut archetypes, archetype, category, &trait_);
                }
            }
        }
    }

    let domain = sorted(domains);
    let archetype = sorted(archetypes);
    let metadata = IndexMetadata {
        total_profiles: records.len(),
        domains: domain.len(),
        archetypes: archetype.len(),
        generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    TraitIndex {
        domain,
        archetype,
        metadata,
    }
}

/// Read the corpus: a JSON array of record objects
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read corpus {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse corpus {}", path.display()))?;

    let Value::Array(records) = value else {
        bail!("Corpus {} is not a JSON array of profiles", path.display());
    };
    if let Some(pos) = records.iter().position(|r| !r.is_object()) {
        bail!("Corpus entry {} is not a profile object", pos);
    }

    log::info!("Loaded {} profiles from {}", records.len(), path.display());
    Ok(records)
}

/// Write the index as pretty JSON, replacing the output file only on success
pub fn write_index(index: &TraitIndex, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(index).context("Failed to serialize trait index")?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).context("Failed to create temporary file")?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write trait index {}", path.display()))?;

    log::info!(
        "Trait index written to {}: {} domains, {} archetypes",
        path.display(),
        index.metadata.domains,
        index.metadata.archetypes
    );
    Ok(())
}

/// Load, index and write in one pass
pub fn run(input: &Path, output: &Path, generated: DateTime<Utc>) -> Result<TraitIndex> {
    let records = load_records(input)?;
    let index = build_index(&records, generated);
    write_index(&index, output)?;
    Ok(index)
}
