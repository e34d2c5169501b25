//! Numeric persona dimensions (sliders in [0, 100])

use serde::Serialize;
use std::fmt;

pub const MIN_VALUE: u8 = 0;
pub const MAX_VALUE: u8 = 100;

/// Below this a dimension reads as its low pole
const LOW_THRESHOLD: u8 = 30;
/// Above this a dimension reads as its high pole
const HIGH_THRESHOLD: u8 = 70;

const MODERATE: &str = "Moderate";

/// Slider groups that always appear in exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionGroup {
    Personality,
    Tone,
    Behavioral,
    Interpersonal,
}

impl DimensionGroup {
    pub const ALL: [DimensionGroup; 4] = [
        DimensionGroup::Personality,
        DimensionGroup::Tone,
        DimensionGroup::Behavioral,
        DimensionGroup::Interpersonal,
    ];

    /// Key in profile documents and exports
    pub fn key(&self) -> &'static str {
        match self {
            DimensionGroup::Personality => "personality_dimensions",
            DimensionGroup::Tone => "tone_dimensions",
            DimensionGroup::Behavioral => "behavioral_dimensions",
            DimensionGroup::Interpersonal => "interpersonal_dimensions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DimensionGroup::Personality => "Personality Dimensions",
            DimensionGroup::Tone => "Tone of Voice Dimensions",
            DimensionGroup::Behavioral => "Behavioral Dimensions",
            DimensionGroup::Interpersonal => "Interpersonal Dimensions",
        }
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        Dimension::ALL.into_iter().filter(move |d| d.group() == Some(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    PassiveAssertive,
    PessimisticOptimistic,
    ClosedOpen,
    FormalCasual,
    SeriousFunny,
    RespectfulIrreverent,
    MatterEnthusiastic,
    ConciseDetailed,
    ConservativeRisk,
    DeliberateQuick,
    Empathy,
    Patience,
    Energy,
    TechnologyAdoption,
}

impl Dimension {
    pub const ALL: [Dimension; 14] = [
        Dimension::PassiveAssertive,
        Dimension::PessimisticOptimistic,
        Dimension::ClosedOpen,
        Dimension::FormalCasual,
        Dimension::SeriousFunny,
        Dimension::RespectfulIrreverent,
        Dimension::MatterEnthusiastic,
        Dimension::ConciseDetailed,
        Dimension::ConservativeRisk,
        Dimension::DeliberateQuick,
        Dimension::Empathy,
        Dimension::Patience,
        Dimension::Energy,
        Dimension::TechnologyAdoption,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::PassiveAssertive => "passive_assertive",
            Dimension::PessimisticOptimistic => "pessimistic_optimistic",
            Dimension::ClosedOpen => "closed_open",
            Dimension::FormalCasual => "formal_casual",
            Dimension::SeriousFunny => "serious_funny",
            Dimension::RespectfulIrreverent => "respectful_irreverent",
            Dimension::MatterEnthusiastic => "matter_enthusiastic",
            Dimension::ConciseDetailed => "concise_detailed",
            Dimension::ConservativeRisk => "conservative_risk",
            Dimension::DeliberateQuick => "deliberate_quick",
            Dimension::Empathy => "empathy",
            Dimension::Patience => "patience",
            Dimension::Energy => "energy",
            Dimension::TechnologyAdoption => "technology_adoption",
        }
    }

    pub fn from_name(name: &str) -> Option<Dimension> {
        Dimension::ALL.iter().copied().find(|d| d.name() == name)
    }

    /// Technology adoption stands alone; every other dimension belongs to a slider group
    pub fn group(&self) -> Option<DimensionGroup> {
        match self {
            Dimension::PassiveAssertive | Dimension::PessimisticOptimistic | Dimension::ClosedOpen => {
                Some(DimensionGroup::Personality)
            }
            Dimension::FormalCasual
            | Dimension::SeriousFunny
            | Dimension::RespectfulIrreverent
            | Dimension::MatterEnthusiastic => Some(DimensionGroup::Tone),
            Dimension::ConciseDetailed | Dimension::ConservativeRisk | Dimension::DeliberateQuick => {
                Some(DimensionGroup::Behavioral)
            }
            Dimension::Empathy | Dimension::Patience | Dimension::Energy => Some(DimensionGroup::Interpersonal),
            Dimension::TechnologyAdoption => None,
        }
    }

    pub fn default_value(&self) -> u8 {
        match self {
            Dimension::SeriousFunny | Dimension::RespectfulIrreverent | Dimension::MatterEnthusiastic => 0,
            _ => 50,
        }
    }

    /// (low, high) pole labels
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Dimension::PassiveAssertive => ("Passive", "Assertive"),
            Dimension::PessimisticOptimistic => ("Pessimistic", "Optimistic"),
            Dimension::ClosedOpen => ("Closed-minded", "Open-minded"),
            Dimension::FormalCasual => ("Formal", "Casual"),
            Dimension::SeriousFunny => ("Serious", "Funny"),
            Dimension::RespectfulIrreverent => ("Respectful", "Irreverent"),
            Dimension::MatterEnthusiastic => ("Matter-of-fact", "Enthusiastic"),
            Dimension::ConciseDetailed => ("Concise", "Detailed"),
            Dimension::ConservativeRisk => ("Conservative", "Risk-taking"),
            Dimension::DeliberateQuick => ("Deliberate", "Quick"),
            Dimension::Empathy => ("Low", "High"),
            Dimension::Patience => ("Impatient", "Patient"),
            Dimension::Energy => ("Calm", "Energetic"),
            Dimension::TechnologyAdoption => ("Resistant", "Early Adopter"),
        }
    }

    /// Display title, e.g. "Passive ↔ Assertive"
    pub fn title(&self) -> String {
        match self {
            Dimension::Empathy => "Empathy".to_string(),
            Dimension::Patience => "Patience".to_string(),
            Dimension::Energy => "Energy".to_string(),
            Dimension::TechnologyAdoption => "Technology Adoption".to_string(),
            _ => {
                let (low, high) = self.poles();
                format!("{} ↔ {}", low, high)
            }
        }
    }

    /// Qualitative label for a value of this dimension
    pub fn label(&self, value: u8) -> &'static str {
        if *self == Dimension::TechnologyAdoption {
            return technology_adoption_label(value);
        }

        let (low, high) = self.poles();
        if value < LOW_THRESHOLD {
            low
        } else if value > HIGH_THRESHOLD {
            high
        } else {
            MODERATE
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn technology_adoption_label(value: u8) -> &'static str {
    match value {
        0..=20 => "Resistant",
        21..=40 => "Skeptical",
        41..=60 => "Selective",
        61..=80 => "Pragmatic",
        _ => "Early Adopter",
    }
}
