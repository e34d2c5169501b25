//! Random persona generation

use indexmap::IndexSet;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::persona::dimension::{MAX_VALUE, MIN_VALUE};
use crate::persona::{Dimension, Field, FieldKind, Profile};
use crate::vocab::Vocabulary;

/// Fewest labels drawn for a multi-select field
pub const MIN_MULTI: usize = 2;
/// Most labels drawn for a multi-select field
pub const MAX_MULTI: usize = 6;

/// Draw a fresh profile from the vocabulary.
///
/// Every dimension is drawn uniformly from its full range. Multi-select
/// fields get between 2 and 6 distinct labels (fewer when the vocabulary is
/// smaller), single-select fields get one. Free text is left empty.
pub fn randomize<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Profile {
    let mut profile = Profile::default();

    for dimension in Dimension::ALL {
        let value = rng.gen_range(MIN_VALUE..=MAX_VALUE);
        if let Err(e) = profile.set_dimension(dimension, value) {
            log::warn!("Skipping {} while randomizing: {}", dimension, e);
        }
    }

    for field in Field::ALL {
        if field.kind() == FieldKind::Text {
            continue;
        }
        let Some(labels) = vocabulary.labels(field) else {
            continue;
        };
        let distinct: Vec<&String> = labels
            .iter()
            .filter(|l| !l.trim().is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        if distinct.is_empty() {
            continue;
        }

        let result = match field.kind() {
            FieldKind::Multi => {
                let count = rng.gen_range(MIN_MULTI..=MAX_MULTI).min(distinct.len());
                let picked: Vec<String> = distinct.choose_multiple(rng, count).map(|l| (*l).clone()).collect();
                profile.set_labels(field, picked)
            }
            _ => match distinct.choose(rng) {
                Some(label) => profile.select(field, label),
                None => Ok(()),
            },
        };
        if let Err(e) = result {
            log::warn!("Skipping {} while randomizing: {}", field, e);
        }
    }

    log::debug!("Randomized persona");
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        let mut entries = IndexMap::new();
        entries.insert(
            "primary_traits".to_string(),
            ["bold", "calm", "curious", "witty", "kind", "stoic", "brave", "shy"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        entries.insert(
            "core_values".to_string(),
            vec!["honesty".to_string(), "honesty".to_string(), "courage".to_string()],
        );
        entries.insert(
            "cognitive_style".to_string(),
            vec!["analytical".to_string(), "intuitive".to_string()],
        );
        entries.insert("decision_making_framework".to_string(), vec!["data first".to_string()]);
        Vocabulary::from_entries(entries)
    }

    #[test]
    fn test_sizes_and_membership() {
        let vocab = vocabulary();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let profile = randomize(&vocab, &mut rng);

            let traits = profile.labels(Field::PrimaryTraits).unwrap();
            assert!((MIN_MULTI..=MAX_MULTI).contains(&traits.len()));
            assert!(traits.iter().all(|t| vocab.contains(Field::PrimaryTraits, t)));

            // Only two distinct values available
            let values = profile.labels(Field::CoreValues).unwrap();
            assert_eq!(values.len(), 2);

            let style = profile.scalar(Field::CognitiveStyle).unwrap();
            assert!(vocab.contains(Field::CognitiveStyle, style));

            assert_eq!(profile.scalar(Field::DecisionMakingFramework), None);
            assert!(!profile.is_populated(Field::BlindSpots));

            for dimension in Dimension::ALL {
                assert!(profile.dimension(dimension) <= MAX_VALUE);
            }
        }
    }

    #[test]
    fn test_every_dimension_is_drawn() {
        let vocab = vocabulary();
        for dimension in Dimension::ALL {
            let moved = (0..20).any(|seed| {
                let profile = randomize(&vocab, &mut StdRng::seed_from_u64(seed));
                profile.dimension(dimension) != dimension.default_value()
            });
            assert!(moved, "{} never left its default", dimension);
        }
    }

    #[test]
    fn test_same_seed_same_profile() {
        let vocab = vocabulary();
        let a = randomize(&vocab, &mut StdRng::seed_from_u64(7));
        let b = randomize(&vocab, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
