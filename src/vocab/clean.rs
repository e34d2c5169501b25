//! Vocabulary cleaning
//!
//! Raw vocabularies harvested from profile corpora contain methods, processes
//! and domain jargon ("market analysis", "data-driven") next to real
//! personality descriptors. Cleaning keeps the descriptors.

use indexmap::IndexMap;
use lazy_regex::{regex, regex_is_match};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

use super::Vocabulary;
use crate::persona::Field;

/// Words naming a method or process rather than a trait
const METHOD_WORDS: &[&str] = &[
    "analysis",
    "analyzing",
    "application",
    "approach",
    "assessment",
    "creation",
    "development",
    "disruption",
    "evaluation",
    "execution",
    "experimentation",
    "exploration",
    "framework",
    "implementation",
    "innovation",
    "method",
    "observation",
    "optimization",
    "procedure",
    "process",
    "reasoning",
    "research",
    "study",
    "system",
    "technique",
    "testing",
    "thinking",
    "transformation",
];

/// Words tying a label to one profession, industry or discipline
const DOMAIN_WORDS: &[&str] = &[
    "advertising",
    "ai",
    "algorithmic",
    "analytical",
    "animation",
    "architectural",
    "artistic",
    "behavioral",
    "brand",
    "business",
    "cinematic",
    "client",
    "content",
    "cultural",
    "customer",
    "data",
    "design",
    "educational",
    "engineering",
    "environmental",
    "hardware",
    "macroeconomic",
    "marketing",
    "mathematical",
    "medical",
    "methodological",
    "musical",
    "operational",
    "organizational",
    "political",
    "product",
    "quantitative",
    "scalable",
    "scientific",
    "software",
    "structural",
    "technical",
    "technology",
    "theoretical",
    "typographic",
    "user",
];

/// Domain words that read as traits when they stand alone
const STANDALONE_TRAITS: &[&str] = &["analytical", "artistic", "creative"];

/// Descriptors of things rather than people
const NOT_PERSONALITY: &[&str] = &[
    "actionable",
    "behavioral",
    "discursive",
    "encyclopedic",
    "ergonomic",
    "fundamental",
    "global",
    "holistic",
    "immersive",
    "integrative",
    "investigative",
    "mediating",
    "operational",
    "organizational",
    "referential",
    "scalable",
    "storytelling",
    "structural",
    "suspenseful",
    "transformational",
    "transformative",
];

/// Compounds that read as traits despite their suffix
const APPROVED_COMPOUNDS: &[&str] = &[
    "action-oriented",
    "detail-oriented",
    "goal-oriented",
    "people-oriented",
    "results-oriented",
    "team-oriented",
];

/// Phrase shapes that describe a practice or a discipline rather than a person
struct RejectPattern {
    regex: &'static Regex,
    description: &'static str,
}

static REJECT_PATTERNS: Lazy<Vec<RejectPattern>> = Lazy::new(|| {
    vec![
        RejectPattern {
            regex: regex!(
                r"\b(driven|focused|oriented|based|centered|obsessed|savvy|minded|conscious|aware|grounded|rooted)\s+(by|on|with|in|for)\b"
            ),
            description: "qualifier phrase",
        },
        RejectPattern {
            regex: regex!(r"^(analytical|methodological|algorithmic|data-driven|research-based)\s+"),
            description: "method-prefixed phrase",
        },
        RejectPattern {
            regex: regex!(
                r"\b(anatomical|compositional|copywriting|commentary|collaborative|creative|ergonomic|experimental|inventive|literary|narrative|nursing|performance|persuasive|professional|programming|sales|scholarly|strategic|systematic|teaching|therapeutic)\s+excellence\b"
            ),
            description: "discipline excellence",
        },
        RejectPattern {
            regex: regex!(r"\b(clear|forward|systems)\s*-\s*thinking\b"),
            description: "thinking compound",
        },
        RejectPattern {
            regex: regex!(
                r"\b(artistically|emotionally|intellectually)\s*-\s*(expressive|intelligent|rigorous|curious)\b"
            ),
            description: "adverb compound",
        },
        RejectPattern {
            regex: regex!(
                r"\b(compositional|constitutional|contractual|conservationist|developmental|dialectical|ecological|empirical|empiricist|existential|feminist|free-market|historical|humanistic|interdisciplinary|literary|materialist|media-savvy|masculine)\b"
            ),
            description: "school of thought",
        },
        RejectPattern {
            regex: regex!(r"\b(conflict-resolution|[a-z]+-obsessed|legacy-conscious|long-term|high-energy)\b"),
            description: "project descriptor",
        },
        RejectPattern {
            regex: regex!(
                r"\b(conceptual|comprehensive|compositional|contradictory|counterintuitive|dystopian|eternal|groundbreaking|lyrical|prophetic|structural|symbolic|theatrical|visual)\b"
            ),
            description: "work-product adjective",
        },
    ]
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub field: String,
    pub before: usize,
    pub after: usize,
}

impl CleanReport {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

fn has_word(label: &str, list: &[&str]) -> bool {
    regex!(r"[a-z0-9]+")
        .find_iter(label)
        .any(|m| list.contains(&m.as_str()))
}

fn has_domain_word(label: &str) -> bool {
    has_word(label, DOMAIN_WORDS) && !STANDALONE_TRAITS.contains(&label)
}

/// Why a lowercased label is dropped from a field, if it is
fn rejection(field: Option<Field>, lower: &str) -> Option<&'static str> {
    if APPROVED_COMPOUNDS.contains(&lower) {
        return None;
    }
    if has_word(lower, METHOD_WORDS) {
        return Some("method word");
    }
    if let Some(pattern) = REJECT_PATTERNS.iter().find(|p| p.regex.is_match(lower)) {
        return Some(pattern.description);
    }
    if has_domain_word(lower) {
        return Some("domain word");
    }

    let suffixed = regex_is_match!(r"-(oriented|focused|driven|based|centered|minded)$", lower);
    match field {
        Some(Field::PrimaryTraits) => {
            if NOT_PERSONALITY.contains(&lower) {
                Some("not a personality trait")
            } else if regex_is_match!(
                r"-\s*(thinking|expressive|intelligent|rigorous|curious|savvy|conscious|obsessed)",
                lower
            ) {
                Some("hyphenated compound")
            } else if suffixed {
                Some("unapproved compound")
            } else if lower.split_whitespace().count() > 1 {
                Some("phrase")
            } else {
                None
            }
        }
        Some(Field::CoreValues) => {
            if suffixed {
                Some("unapproved compound")
            } else if lower.contains("excellence") && lower.split_whitespace().count() > 1 {
                Some("excellence compound")
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Whether a label survives cleaning for the named field
pub fn keep_label(field: &str, label: &str) -> bool {
    let lower = label.trim().to_lowercase();
    if lower.is_empty() {
        return false;
    }
    match rejection(Field::from_name(field), &lower) {
        Some(reason) => {
            log::debug!("{}: dropping '{}' ({})", field, label, reason);
            false
        }
        None => true,
    }
}

/// Clean every list of a vocabulary: filter, trim, deduplicate, sort
pub fn clean_vocabulary(vocabulary: &Vocabulary) -> (Vocabulary, Vec<CleanReport>) {
    let mut cleaned = IndexMap::new();
    let mut reports = Vec::new();

    for (field, labels) in vocabulary.entries() {
        let kept: BTreeSet<String> = labels
            .iter()
            .map(|l| l.trim())
            .filter(|l| keep_label(field, l))
            .map(str::to_string)
            .collect();

        let report = CleanReport {
            field: field.clone(),
            before: labels.len(),
            after: kept.len(),
        };
        if report.removed() > 0 {
            log::info!("{}: {} -> {} ({} removed)", field, report.before, report.after, report.removed());
        }
        reports.push(report);
        cleaned.insert(field.clone(), kept.into_iter().collect());
    }

    (Vocabulary::from_entries(cleaned), reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_words_dropped() {
        assert!(!keep_label("work_style", "analytical thinking"));
        assert!(!keep_label("learning_style", "market research"));
        assert!(keep_label("work_style", "methodical"));
    }

    #[test]
    fn test_reject_patterns() {
        assert!(!keep_label("work_style", "driven by curiosity"));
        assert!(!keep_label("communication_tone", "media-savvy"));
        assert!(!keep_label("primary_traits", "algorithmic precision"));
        assert!(keep_label("work_style", "focused"));
        assert!(keep_label("communication_tone", "open-minded"));
    }

    #[test]
    fn test_approved_compounds_kept() {
        assert!(keep_label("primary_traits", "detail-oriented"));
        assert!(keep_label("primary_traits", "Results-Oriented"));
        assert!(!keep_label("primary_traits", "customer-focused"));
        assert!(!keep_label("primary_traits", "growth-minded"));
    }

    #[test]
    fn test_domain_words_in_every_field() {
        assert!(!keep_label("primary_traits", "scientific"));
        assert!(!keep_label("core_values", "user privacy"));
        assert!(!keep_label("communication_tone", "brand-aware"));
        assert!(!keep_label("work_style", "political"));
        assert!(!keep_label("learning_style", "technical deep dives"));
    }

    #[test]
    fn test_standalone_domain_traits_kept() {
        assert!(keep_label("primary_traits", "analytical"));
        assert!(keep_label("primary_traits", "Artistic"));
        assert!(keep_label("cognitive_style", "analytical"));
        assert!(!keep_label("cognitive_style", "artistic vision"));
    }

    #[test]
    fn test_not_personality_primary_traits() {
        assert!(!keep_label("primary_traits", "scalable"));
        assert!(!keep_label("primary_traits", "holistic"));
        assert!(!keep_label("primary_traits", "global"));
        assert!(keep_label("work_style", "holistic"));
    }

    #[test]
    fn test_primary_traits_single_terms_only() {
        assert!(!keep_label("primary_traits", "quietly confident"));
        assert!(!keep_label("primary_traits", "intellectually-curious"));
        assert!(keep_label("primary_traits", "risk-taking"));
        assert!(keep_label("work_style", "quietly confident"));
    }

    #[test]
    fn test_discipline_patterns_every_field() {
        assert!(!keep_label("work_style", "strategic excellence"));
        assert!(!keep_label("work_style", "long-term"));
        assert!(!keep_label("stress_responses", "high-energy"));
        assert!(!keep_label("work_style", "funnel-obsessed"));
        assert!(!keep_label("problem_solving_approach", "forward-thinking"));
        assert!(!keep_label("communication_tone", "emotionally-expressive"));
        assert!(!keep_label("communication_tone", "empirical"));
        assert!(!keep_label("learning_style", "existential"));
    }

    #[test]
    fn test_work_product_adjectives() {
        assert!(!keep_label("primary_traits", "structural"));
        assert!(!keep_label("primary_traits", "conceptual"));
        assert!(!keep_label("communication_tone", "symbolic"));
        assert!(!keep_label("learning_style", "visual"));
        assert!(keep_label("communication_tone", "warm"));
    }

    #[test]
    fn test_excellence_compounds() {
        assert!(!keep_label("core_values", "teaching excellence"));
        assert!(!keep_label("core_values", "personal excellence"));
        assert!(keep_label("core_values", "excellence"));
        assert!(keep_label("work_style", "personal excellence"));
    }

    #[test]
    fn test_clean_vocabulary_dedupes_and_sorts() {
        let vocab = Vocabulary::from_json(
            r#"{"primary_traits": ["curious", " bold", "bold", "data-driven", ""], "core_values": ["honesty"]}"#,
        )
        .unwrap();
        let (cleaned, reports) = clean_vocabulary(&vocab);

        assert_eq!(cleaned.entries()["primary_traits"], vec!["bold", "curious"]);
        assert_eq!(cleaned.entries()["core_values"], vec!["honesty"]);
        assert_eq!(reports[0].before, 5);
        assert_eq!(reports[0].after, 2);
        assert_eq!(reports[1].removed(), 0);
    }
}
