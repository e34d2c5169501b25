//! The persona profile and its on-disk document form

use eyre::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::dimension::{Dimension, DimensionGroup, MAX_VALUE};
use super::field::{Field, FieldKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("unknown dimension '{dimension}' in {group}")]
    UnknownDimension { group: String, dimension: String },

    #[error("field '{field}' holds {kind} values")]
    WrongKind { field: Field, kind: FieldKind },

    #[error("{dimension} must be between 0 and 100, got {value}")]
    OutOfRange { dimension: Dimension, value: u8 },

    #[error("empty label for field '{0}'")]
    EmptyLabel(Field),
}

/// A persona under construction.
///
/// Unselected single-select fields and empty text are absent from `scalars`,
/// and an emptied multi-select set is removed from `sets`, so presence in
/// either map means the field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ProfileDocument", try_from = "ProfileDocument")]
pub struct Profile {
    scalars: IndexMap<Field, String>,
    sets: IndexMap<Field, IndexSet<String>>,
    dimensions: IndexMap<Dimension, u8>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            scalars: IndexMap::new(),
            sets: IndexMap::new(),
            dimensions: Dimension::ALL.iter().map(|d| (*d, d.default_value())).collect(),
        }
    }
}

impl Profile {
    /// Toggle a label: deselect when already chosen, otherwise select it.
    ///
    /// Single-select fields swap directly from one label to another.
    pub fn toggle(&mut self, field: Field, label: &str) -> Result<(), ProfileError> {
        if label.trim().is_empty() {
            return Err(ProfileError::EmptyLabel(field));
        }

        match field.kind() {
            FieldKind::Text => Err(ProfileError::WrongKind {
                field,
                kind: FieldKind::Text,
            }),
            FieldKind::Single => {
                if self.scalars.get(&field).is_some_and(|current| current == label) {
                    self.scalars.shift_remove(&field);
                } else {
                    self.scalars.insert(field, label.to_string());
                }
                Ok(())
            }
            FieldKind::Multi => {
                let set = self.sets.entry(field).or_default();
                if !set.shift_remove(label) {
                    set.insert(label.to_string());
                }
                if set.is_empty() {
                    self.sets.shift_remove(&field);
                }
                Ok(())
            }
        }
    }

    /// Remove a selected label. Single-select fields are cleared whatever the label.
    pub fn remove(&mut self, field: Field, label: &str) -> Result<(), ProfileError> {
        match field.kind() {
            FieldKind::Text => Err(ProfileError::WrongKind {
                field,
                kind: FieldKind::Text,
            }),
            FieldKind::Single => {
                self.scalars.shift_remove(&field);
                Ok(())
            }
            FieldKind::Multi => {
                if let Some(set) = self.sets.get_mut(&field) {
                    set.shift_remove(label);
                    if set.is_empty() {
                        self.sets.shift_remove(&field);
                    }
                }
                Ok(())
            }
        }
    }

    /// Replace the selection of a single-select field
    pub fn select(&mut self, field: Field, label: &str) -> Result<(), ProfileError> {
        if field.kind() != FieldKind::Single {
            return Err(ProfileError::WrongKind {
                field,
                kind: field.kind(),
            });
        }
        if label.trim().is_empty() {
            self.scalars.shift_remove(&field);
        } else {
            self.scalars.insert(field, label.to_string());
        }
        Ok(())
    }

    /// Replace the whole set of a multi-select field
    pub fn set_labels<I, S>(&mut self, field: Field, labels: I) -> Result<(), ProfileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if field.kind() != FieldKind::Multi {
            return Err(ProfileError::WrongKind {
                field,
                kind: field.kind(),
            });
        }
        let set: IndexSet<String> = labels
            .into_iter()
            .map(Into::into)
            .filter(|l: &String| !l.trim().is_empty())
            .collect();
        if set.is_empty() {
            self.sets.shift_remove(&field);
        } else {
            self.sets.insert(field, set);
        }
        Ok(())
    }

    pub fn set_text(&mut self, field: Field, text: &str) -> Result<(), ProfileError> {
        if field.kind() != FieldKind::Text {
            return Err(ProfileError::WrongKind {
                field,
                kind: field.kind(),
            });
        }
        if text.trim().is_empty() {
            self.scalars.shift_remove(&field);
        } else {
            self.scalars.insert(field, text.to_string());
        }
        Ok(())
    }

    pub fn set_dimension(&mut self, dimension: Dimension, value: u8) -> Result<(), ProfileError> {
        if value > MAX_VALUE {
            return Err(ProfileError::OutOfRange { dimension, value });
        }
        self.dimensions.insert(dimension, value);
        Ok(())
    }

    /// Return every field and dimension to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selected label (single-select) or text (free text)
    pub fn scalar(&self, field: Field) -> Option<&str> {
        self.scalars.get(&field).map(String::as_str)
    }

    /// Selected labels of a multi-select field, in selection order
    pub fn labels(&self, field: Field) -> Option<&IndexSet<String>> {
        self.sets.get(&field)
    }

    pub fn dimension(&self, dimension: Dimension) -> u8 {
        self.dimensions
            .get(&dimension)
            .copied()
            .unwrap_or_else(|| dimension.default_value())
    }

    pub fn is_populated(&self, field: Field) -> bool {
        self.scalars.contains_key(&field) || self.sets.contains_key(&field)
    }

    /// Whether a label is currently selected in a field
    pub fn is_selected(&self, field: Field, label: &str) -> bool {
        match field.kind() {
            FieldKind::Multi => self.sets.get(&field).is_some_and(|s| s.contains(label)),
            _ => self.scalars.get(&field).is_some_and(|s| s == label),
        }
    }
}

/// Selection as written in a profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    One(String),
    Many(Vec<String>),
}

/// Profile as stored in YAML/JSON profile files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub personality_dimensions: IndexMap<String, u8>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tone_dimensions: IndexMap<String, u8>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub behavioral_dimensions: IndexMap<String, u8>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub interpersonal_dimensions: IndexMap<String, u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology_adoption: Option<u8>,
    #[serde(flatten)]
    pub fields: IndexMap<String, LabelValue>,
}

impl ProfileDocument {
    fn group(&self, group: DimensionGroup) -> &IndexMap<String, u8> {
        match group {
            DimensionGroup::Personality => &self.personality_dimensions,
            DimensionGroup::Tone => &self.tone_dimensions,
            DimensionGroup::Behavioral => &self.behavioral_dimensions,
            DimensionGroup::Interpersonal => &self.interpersonal_dimensions,
        }
    }

    fn group_mut(&mut self, group: DimensionGroup) -> &mut IndexMap<String, u8> {
        match group {
            DimensionGroup::Personality => &mut self.personality_dimensions,
            DimensionGroup::Tone => &mut self.tone_dimensions,
            DimensionGroup::Behavioral => &mut self.behavioral_dimensions,
            DimensionGroup::Interpersonal => &mut self.interpersonal_dimensions,
        }
    }
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        let mut doc = ProfileDocument::default();

        for field in Field::ALL {
            if let Some(value) = profile.scalar(field) {
                doc.fields.insert(field.name().to_string(), LabelValue::One(value.to_string()));
            } else if let Some(labels) = profile.labels(field) {
                doc.fields
                    .insert(field.name().to_string(), LabelValue::Many(labels.iter().cloned().collect()));
            }
        }

        for dimension in Dimension::ALL {
            let value = profile.dimension(dimension);
            match dimension.group() {
                Some(group) => {
                    doc.group_mut(group).insert(dimension.name().to_string(), value);
                }
                None => doc.technology_adoption = Some(value),
            }
        }

        doc
    }
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = ProfileError;

    fn try_from(doc: ProfileDocument) -> Result<Self, Self::Error> {
        let mut profile = Profile::default();

        for (name, value) in &doc.fields {
            let field = Field::from_name(name).ok_or_else(|| ProfileError::UnknownField(name.clone()))?;
            match (field.kind(), value) {
                (FieldKind::Text, LabelValue::One(text)) => profile.set_text(field, text)?,
                (FieldKind::Single, LabelValue::One(label)) => profile.select(field, label)?,
                (FieldKind::Multi, LabelValue::One(label)) => profile.set_labels(field, [label.as_str()])?,
                (FieldKind::Multi, LabelValue::Many(labels)) => profile.set_labels(field, labels.iter().cloned())?,
                (kind, LabelValue::Many(_)) => return Err(ProfileError::WrongKind { field, kind }),
            }
        }

        for group in DimensionGroup::ALL {
            for (name, value) in doc.group(group) {
                let dimension = Dimension::from_name(name)
                    .filter(|d| d.group() == Some(group))
                    .ok_or_else(|| ProfileError::UnknownDimension {
                        group: group.key().to_string(),
                        dimension: name.clone(),
                    })?;
                profile.set_dimension(dimension, *value)?;
            }
        }

        if let Some(value) = doc.technology_adoption {
            profile.set_dimension(Dimension::TechnologyAdoption, value)?;
        }

        Ok(profile)
    }
}

/// Load a profile from a YAML or JSON file.
///
/// Accepts both profile documents and persona exports produced by `render`.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read profile {}", path.display()))?;

    let is_json = path.extension().is_some_and(|e| e == "json");
    let value: serde_json::Value = if is_json {
        serde_json::from_str(&content).context("Failed to parse profile JSON")?
    } else {
        serde_yaml::from_str(&content).context("Failed to parse profile YAML")?
    };

    let profile = if value.get("persona").is_some() {
        crate::render::json::profile_from_export(&value).context("Failed to read persona export")?
    } else {
        serde_json::from_value(value).context("Invalid profile document")?
    };

    log::info!("Loaded profile from {}", path.display());
    Ok(profile)
}

/// Write a profile document as YAML
pub fn save_profile(profile: &Profile, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(profile).context("Failed to serialize profile")?;
    fs::write(path, yaml).with_context(|| format!("Failed to write profile to {}", path.display()))?;
    log::info!("Saved profile to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_select_toggle_cancels() {
        let mut profile = Profile::default();
        profile.toggle(Field::CognitiveStyle, "analytical").unwrap();
        assert_eq!(profile.scalar(Field::CognitiveStyle), Some("analytical"));

        profile.toggle(Field::CognitiveStyle, "analytical").unwrap();
        assert_eq!(profile.scalar(Field::CognitiveStyle), None);
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_single_select_swaps_directly() {
        let mut profile = Profile::default();
        profile.toggle(Field::CrisisResponse, "calm").unwrap();
        profile.toggle(Field::CrisisResponse, "decisive").unwrap();
        assert_eq!(profile.scalar(Field::CrisisResponse), Some("decisive"));
    }

    #[test]
    fn test_multi_select_toggle_is_involutive() {
        let mut profile = Profile::default();
        profile.toggle(Field::PrimaryTraits, "bold").unwrap();
        profile.toggle(Field::PrimaryTraits, "curious").unwrap();
        let before = profile.clone();

        profile.toggle(Field::PrimaryTraits, "witty").unwrap();
        profile.toggle(Field::PrimaryTraits, "witty").unwrap();
        assert_eq!(profile, before);

        profile.toggle(Field::PrimaryTraits, "bold").unwrap();
        profile.toggle(Field::PrimaryTraits, "bold").unwrap();
        assert_eq!(profile, before);
    }

    #[test]
    fn test_multi_select_preserves_selection_order() {
        let mut profile = Profile::default();
        for label in ["zesty", "agile", "mellow"] {
            profile.toggle(Field::CoreValues, label).unwrap();
        }
        let labels: Vec<_> = profile.labels(Field::CoreValues).unwrap().iter().cloned().collect();
        assert_eq!(labels, vec!["zesty", "agile", "mellow"]);
    }

    #[test]
    fn test_emptied_set_is_unpopulated() {
        let mut profile = Profile::default();
        profile.toggle(Field::BlindSpots, "impatience").unwrap();
        assert!(profile.is_populated(Field::BlindSpots));
        profile.remove(Field::BlindSpots, "impatience").unwrap();
        assert!(!profile.is_populated(Field::BlindSpots));
        assert!(profile.labels(Field::BlindSpots).is_none());
    }

    #[test]
    fn test_toggle_rejects_text_field_and_empty_label() {
        let mut profile = Profile::default();
        assert!(matches!(
            profile.toggle(Field::DecisionMakingFramework, "x"),
            Err(ProfileError::WrongKind { .. })
        ));
        assert_eq!(
            profile.toggle(Field::PrimaryTraits, "  "),
            Err(ProfileError::EmptyLabel(Field::PrimaryTraits))
        );
    }

    #[test]
    fn test_remove_clears_single_select() {
        let mut profile = Profile::default();
        profile.toggle(Field::TimeOrientation, "future-focused").unwrap();
        profile.remove(Field::TimeOrientation, "anything").unwrap();
        assert_eq!(profile.scalar(Field::TimeOrientation), None);
    }

    #[test]
    fn test_set_dimension_range() {
        let mut profile = Profile::default();
        profile.set_dimension(Dimension::Empathy, 100).unwrap();
        assert_eq!(profile.dimension(Dimension::Empathy), 100);
        assert_eq!(
            profile.set_dimension(Dimension::Empathy, 101),
            Err(ProfileError::OutOfRange {
                dimension: Dimension::Empathy,
                value: 101
            })
        );
        assert_eq!(profile.dimension(Dimension::Empathy), 100);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut profile = Profile::default();
        profile.toggle(Field::PrimaryTraits, "bold").unwrap();
        profile.set_text(Field::DecisionMakingFramework, "first principles").unwrap();
        profile.set_dimension(Dimension::SeriousFunny, 90).unwrap();
        profile.reset();
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.dimension(Dimension::SeriousFunny), 0);
        assert_eq!(profile.dimension(Dimension::FormalCasual), 50);
    }

    #[test]
    fn test_document_yaml_parse() {
        let yaml = r#"
primary_traits: [bold, curious]
cognitive_style: analytical
decision_making_framework: First principles
tone_dimensions:
  formal_casual: 80
technology_adoption: 90
"#;
        let profile: Profile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.labels(Field::PrimaryTraits).unwrap().len(), 2);
        assert_eq!(profile.scalar(Field::CognitiveStyle), Some("analytical"));
        assert_eq!(profile.dimension(Dimension::FormalCasual), 80);
        assert_eq!(profile.dimension(Dimension::SeriousFunny), 0);
        assert_eq!(profile.dimension(Dimension::TechnologyAdoption), 90);
    }

    #[test]
    fn test_document_rejects_unknown_and_mismatched() {
        let unknown: Result<Profile, _> = serde_yaml::from_str("favourite_color: blue\n");
        assert!(unknown.is_err());

        let list_for_single: Result<Profile, _> = serde_yaml::from_str("cognitive_style: [a, b]\n");
        assert!(list_for_single.is_err());

        let wrong_group: Result<Profile, _> = serde_yaml::from_str("tone_dimensions:\n  empathy: 10\n");
        assert!(wrong_group.is_err());

        let out_of_range: Result<Profile, _> = serde_yaml::from_str("technology_adoption: 150\n");
        assert!(out_of_range.is_err());
    }

    #[test]
    fn test_document_roundtrip_preserves_values() {
        let mut profile = Profile::default();
        profile.toggle(Field::CoreValues, "integrity").unwrap();
        profile.toggle(Field::CollaborationStyle, "consensus builder").unwrap();
        profile.set_dimension(Dimension::Energy, 12).unwrap();

        let yaml = serde_yaml::to_string(&profile).unwrap();
        let parsed: Profile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_save_and_load_profile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("persona.yaml");

        let mut profile = Profile::default();
        profile.toggle(Field::WorkStyle, "methodical").unwrap();
        save_profile(&profile, &path).unwrap();

        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded, profile);
    }
}
