//! Persona serialization
//!
//! A profile is first turned into a [`Document`], an ordered list of populated
//! sections, by walking one table of section definitions. The Markdown, JSON and
//! YAML writers all consume that document, so they always agree on which
//! sections and entries exist; only the lexical shape differs.

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::persona::{Dimension, DimensionGroup, Field, FieldKind, Profile};

pub mod json;
pub mod markdown;
pub mod yaml;

pub const GENERATOR: &str = "Persona Engine";
pub const SCHEMA_VERSION: &str = "1.0";
pub const DOCUMENT_TITLE: &str = "AI Agent Persona";

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Structured Markdown outline
    #[default]
    #[value(alias = "md")]
    Markdown,
    /// Machine-readable JSON tree
    Json,
    /// Human-readable YAML tree
    #[value(alias = "yml")]
    Yaml,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Name of the downloaded file for this format
    pub fn download_filename(&self) -> String {
        format!("persona.{}", self.extension())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Markdown => write!(f, "markdown"),
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

/// Values that are not part of the profile but appear in exports
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub generated_at: DateTime<Utc>,
}

impl RenderContext {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
        }
    }

    pub fn generated_at(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A dimension value with its qualitative label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    #[serde(skip)]
    pub dimension: Dimension,
    pub value: u8,
    pub label: &'static str,
}

impl Reading {
    fn of(profile: &Profile, dimension: Dimension) -> Self {
        let value = profile.dimension(dimension);
        Self {
            dimension,
            value,
            label: dimension.label(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Text(String),
    List(Vec<String>),
    Dimensions(Vec<Reading>),
    Rated(Reading),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: &'static str,
    pub title: String,
    pub value: EntryValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

/// Populated sections of a profile, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// One line item of a section definition
#[derive(Debug, Clone, Copy)]
enum Item {
    /// Slider group, always emitted
    Group(DimensionGroup),
    /// Standalone rated dimension, always emitted
    Rated(Dimension),
    /// Label field, emitted when populated
    Field(Field),
}

impl Item {
    fn entry(&self, profile: &Profile) -> Option<Entry> {
        match *self {
            Item::Group(group) => Some(Entry {
                key: group.key(),
                title: group.title().to_string(),
                value: EntryValue::Dimensions(group.dimensions().map(|d| Reading::of(profile, d)).collect()),
            }),
            Item::Rated(dimension) => Some(Entry {
                key: dimension.name(),
                title: dimension.title(),
                value: EntryValue::Rated(Reading::of(profile, dimension)),
            }),
            Item::Field(field) => {
                let value = match field.kind() {
                    FieldKind::Multi => EntryValue::List(profile.labels(field)?.iter().cloned().collect()),
                    FieldKind::Single | FieldKind::Text => EntryValue::Text(profile.scalar(field)?.to_string()),
                };
                Some(Entry {
                    key: field.export_key(),
                    title: field.title().to_string(),
                    value,
                })
            }
        }
    }
}

struct SectionDef {
    key: &'static str,
    title: &'static str,
    items: &'static [Item],
}

const SECTIONS: &[SectionDef] = &[
    SectionDef {
        key: "core_personality",
        title: "Core Personality",
        items: &[
            Item::Group(DimensionGroup::Personality),
            Item::Field(Field::PrimaryTraits),
            Item::Field(Field::CognitiveStyle),
            Item::Field(Field::CoreMotivations),
            Item::Field(Field::DecisionMakingFramework),
        ],
    },
    SectionDef {
        key: "communication_style",
        title: "Communication Style",
        items: &[
            Item::Group(DimensionGroup::Tone),
            Item::Field(Field::CommunicationTone),
            Item::Field(Field::CommunicationSentenceStructure),
        ],
    },
    SectionDef {
        key: "behavioral_patterns",
        title: "Behavioral Patterns",
        items: &[
            Item::Group(DimensionGroup::Behavioral),
            Item::Field(Field::WorkStyle),
            Item::Field(Field::ProblemSolvingApproach),
            Item::Field(Field::LearningStyle),
        ],
    },
    SectionDef {
        key: "values",
        title: "Values & Ethics",
        items: &[Item::Field(Field::CoreValues)],
    },
    SectionDef {
        key: "behavioral_humanism",
        title: "Behavioral Humanism",
        items: &[
            Item::Field(Field::BiasAwareness),
            Item::Field(Field::GrowthMotivation),
            Item::Field(Field::CognitiveHumanism),
            Item::Field(Field::HumanisticCognition),
            Item::Field(Field::SelfActualization),
            Item::Field(Field::BehavioralGrowth),
        ],
    },
    SectionDef {
        key: "tier_1_modern_dimensions",
        title: "Modern Dimensions (Tier 1)",
        items: &[
            Item::Rated(Dimension::TechnologyAdoption),
            Item::Field(Field::CrisisResponse),
            Item::Field(Field::InfluenceStyle),
        ],
    },
    SectionDef {
        key: "tier_2_interpersonal_dimensions",
        title: "Interpersonal Dimensions (Tier 2)",
        items: &[
            Item::Group(DimensionGroup::Interpersonal),
            Item::Field(Field::ResourceRelationship),
            Item::Field(Field::TimeOrientation),
            Item::Field(Field::CollaborationStyle),
            Item::Field(Field::LeadershipStyle),
        ],
    },
    SectionDef {
        key: "stress_and_awareness",
        title: "Stress Responses & Blind Spots",
        items: &[Item::Field(Field::StressResponses), Item::Field(Field::BlindSpots)],
    },
];

impl Document {
    pub fn from_profile(profile: &Profile) -> Self {
        let sections = SECTIONS
            .iter()
            .filter_map(|def| {
                let entries: Vec<Entry> = def.items.iter().filter_map(|item| item.entry(profile)).collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(Section {
                        key: def.key,
                        title: def.title,
                        entries,
                    })
                }
            })
            .collect();

        Self { sections }
    }

    #[cfg(test)]
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// Render a profile in the given format
pub fn render(profile: &Profile, format: Format, ctx: &RenderContext) -> String {
    let document = Document::from_profile(profile);
    match format {
        Format::Markdown => markdown::render(&document),
        Format::Json => json::render(&document, ctx),
        Format::Yaml => yaml::render(&document, ctx),
    }
}

/// Escape text for embedding in an HTML preformatted block
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped output wrapped for the on-page preview region
pub fn preview_html(text: &str) -> String {
    format!("<pre>{}</pre>", escape_html(text))
}
