//! Label-bearing profile fields
//!
//! Every field a persona can hold a label (or free text) for. Numeric sliders
//! live in [`super::dimension`] instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a field holds its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text typed by the user
    Text,
    /// At most one label
    Single,
    /// A set of labels
    Multi,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Single => write!(f, "single"),
            FieldKind::Multi => write!(f, "multi"),
        }
    }
}

/// Output section a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Communication,
    Behavioral,
    Values,
    Humanism,
    Tier1,
    Tier2,
    Stress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PrimaryTraits,
    CognitiveStyle,
    CoreMotivations,
    DecisionMakingFramework,
    CommunicationTone,
    CommunicationSentenceStructure,
    WorkStyle,
    ProblemSolvingApproach,
    LearningStyle,
    CoreValues,
    BiasAwareness,
    GrowthMotivation,
    CognitiveHumanism,
    HumanisticCognition,
    SelfActualization,
    BehavioralGrowth,
    CrisisResponse,
    InfluenceStyle,
    ResourceRelationship,
    TimeOrientation,
    CollaborationStyle,
    LeadershipStyle,
    StressResponses,
    BlindSpots,
}

impl Field {
    pub const ALL: [Field; 24] = [
        Field::PrimaryTraits,
        Field::CognitiveStyle,
        Field::CoreMotivations,
        Field::DecisionMakingFramework,
        Field::CommunicationTone,
        Field::CommunicationSentenceStructure,
        Field::WorkStyle,
        Field::ProblemSolvingApproach,
        Field::LearningStyle,
        Field::CoreValues,
        Field::BiasAwareness,
        Field::GrowthMotivation,
        Field::CognitiveHumanism,
        Field::HumanisticCognition,
        Field::SelfActualization,
        Field::BehavioralGrowth,
        Field::CrisisResponse,
        Field::InfluenceStyle,
        Field::ResourceRelationship,
        Field::TimeOrientation,
        Field::CollaborationStyle,
        Field::LeadershipStyle,
        Field::StressResponses,
        Field::BlindSpots,
    ];

    /// Name used in vocabulary files, profile documents and exports
    pub fn name(&self) -> &'static str {
        match self {
            Field::PrimaryTraits => "primary_traits",
            Field::CognitiveStyle => "cognitive_style",
            Field::CoreMotivations => "core_motivations",
            Field::DecisionMakingFramework => "decision_making_framework",
            Field::CommunicationTone => "communication_tone",
            Field::CommunicationSentenceStructure => "communication_sentence_structure",
            Field::WorkStyle => "work_style",
            Field::ProblemSolvingApproach => "problem_solving_approach",
            Field::LearningStyle => "learning_style",
            Field::CoreValues => "core_values",
            Field::BiasAwareness => "bias_awareness",
            Field::GrowthMotivation => "growth_motivation",
            Field::CognitiveHumanism => "cognitive_humanism",
            Field::HumanisticCognition => "humanistic_cognition",
            Field::SelfActualization => "self_actualization",
            Field::BehavioralGrowth => "behavioral_growth",
            Field::CrisisResponse => "crisis_response",
            Field::InfluenceStyle => "influence_style",
            Field::ResourceRelationship => "resource_relationship",
            Field::TimeOrientation => "time_orientation",
            Field::CollaborationStyle => "collaboration_style",
            Field::LeadershipStyle => "leadership_style",
            Field::StressResponses => "stress_responses",
            Field::BlindSpots => "blind_spots",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::DecisionMakingFramework => FieldKind::Text,
            Field::CognitiveStyle
            | Field::CrisisResponse
            | Field::InfluenceStyle
            | Field::ResourceRelationship
            | Field::TimeOrientation
            | Field::CollaborationStyle => FieldKind::Single,
            _ => FieldKind::Multi,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Field::PrimaryTraits | Field::CognitiveStyle | Field::CoreMotivations | Field::DecisionMakingFramework => {
                Category::Core
            }
            Field::CommunicationTone | Field::CommunicationSentenceStructure => Category::Communication,
            Field::WorkStyle | Field::ProblemSolvingApproach | Field::LearningStyle => Category::Behavioral,
            Field::CoreValues => Category::Values,
            Field::BiasAwareness
            | Field::GrowthMotivation
            | Field::CognitiveHumanism
            | Field::HumanisticCognition
            | Field::SelfActualization
            | Field::BehavioralGrowth => Category::Humanism,
            Field::CrisisResponse | Field::InfluenceStyle => Category::Tier1,
            Field::ResourceRelationship
            | Field::TimeOrientation
            | Field::CollaborationStyle
            | Field::LeadershipStyle => Category::Tier2,
            Field::StressResponses | Field::BlindSpots => Category::Stress,
        }
    }

    /// Large vocabularies with shared leading words read better grouped by root
    pub fn groupable(&self) -> bool {
        matches!(
            self,
            Field::CoreValues
                | Field::CoreMotivations
                | Field::CommunicationTone
                | Field::WorkStyle
                | Field::ProblemSolvingApproach
                | Field::LearningStyle
                | Field::CommunicationSentenceStructure
                | Field::LeadershipStyle
                | Field::PrimaryTraits
                | Field::BlindSpots
                | Field::StressResponses
                | Field::GrowthMotivation
                | Field::BehavioralGrowth
                | Field::HumanisticCognition
                | Field::BiasAwareness
        )
    }

    /// Heading used in Markdown output
    pub fn title(&self) -> &'static str {
        match self {
            Field::PrimaryTraits => "Primary Traits",
            Field::CognitiveStyle => "Cognitive Style",
            Field::CoreMotivations => "Core Motivations",
            Field::DecisionMakingFramework => "Decision Making Framework",
            Field::CommunicationTone => "Additional Tone Traits",
            Field::CommunicationSentenceStructure => "Sentence Structure",
            Field::WorkStyle => "Work Style",
            Field::ProblemSolvingApproach => "Problem Solving Approach",
            Field::LearningStyle => "Learning Style",
            Field::CoreValues => "Core Values",
            Field::BiasAwareness => "Bias Awareness",
            Field::GrowthMotivation => "Growth Motivation",
            Field::CognitiveHumanism => "Cognitive Humanism",
            Field::HumanisticCognition => "Humanistic Cognition",
            Field::SelfActualization => "Self-Actualization",
            Field::BehavioralGrowth => "Behavioral Growth",
            Field::CrisisResponse => "Crisis Response",
            Field::InfluenceStyle => "Influence Style",
            Field::ResourceRelationship => "Resource Relationship",
            Field::TimeOrientation => "Time Orientation",
            Field::CollaborationStyle => "Collaboration Style",
            Field::LeadershipStyle => "Leadership Style",
            Field::StressResponses => "Stress Responses",
            Field::BlindSpots => "Blind Spots",
        }
    }

    /// Key used inside an export section; communication fields drop their prefix there
    pub fn export_key(&self) -> &'static str {
        match self {
            Field::CommunicationTone => "tone",
            Field::CommunicationSentenceStructure => "sentence_structure",
            other => other.name(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("nonsense"), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Field::DecisionMakingFramework.kind(), FieldKind::Text);
        assert_eq!(Field::CognitiveStyle.kind(), FieldKind::Single);
        assert_eq!(Field::CollaborationStyle.kind(), FieldKind::Single);
        assert_eq!(Field::LeadershipStyle.kind(), FieldKind::Multi);

        let singles = Field::ALL.iter().filter(|f| f.kind() == FieldKind::Single).count();
        assert_eq!(singles, 6);
    }

    #[test]
    fn test_groupable_excludes_single_select_and_small_humanism_fields() {
        assert!(Field::PrimaryTraits.groupable());
        assert!(!Field::CognitiveStyle.groupable());
        assert!(!Field::CognitiveHumanism.groupable());
        assert!(!Field::SelfActualization.groupable());
    }

    #[test]
    fn test_export_key() {
        assert_eq!(Field::CommunicationTone.export_key(), "tone");
        assert_eq!(Field::WorkStyle.export_key(), "work_style");
    }
}
