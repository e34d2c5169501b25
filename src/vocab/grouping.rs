//! Group vocabulary labels by their leading word
//!
//! Large vocabularies are easier to scan when "risk averse", "risk tolerant"
//! and "risk" sit under one "risk" heading. Grouping is purely presentational
//! and is recomputed from the label list every time.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Result of [`group_by_root`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraitGroups {
    /// Root word → member labels (two or more), sorted
    pub groups: BTreeMap<String, Vec<String>>,
    /// Labels not belonging to any group, sorted
    pub standalone: Vec<String>,
}

/// Lowercased whitespace tokens of a label
fn tokens(label: &str) -> Vec<String> {
    label.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Root word of a token: word characters and hyphens only, cut at the first hyphen
fn root_of(token: &str) -> String {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    match cleaned.split_once('-') {
        Some((head, _)) => head.to_string(),
        None => cleaned,
    }
}

/// Split labels into root-word groups and standalone labels.
///
/// Multi-word labels always join their root's bucket. A single-word label
/// joins only when some multi-word label shares its root. Buckets left with
/// a single member are demoted to standalone.
pub fn group_by_root(labels: &[String]) -> TraitGroups {
    // Roots that have at least one multi-word variation
    let multi_word_roots: HashSet<String> = labels
        .iter()
        .map(|l| tokens(l))
        .filter(|t| t.len() > 1)
        .map(|t| root_of(&t[0]))
        .collect();

    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut standalone = Vec::new();

    for label in labels {
        let words = tokens(label);
        let Some(first) = words.first() else {
            continue;
        };

        let root = root_of(first);
        if root.is_empty() {
            standalone.push(label.clone());
            continue;
        }

        if words.len() > 1 || multi_word_roots.contains(&root) {
            buckets.entry(root).or_default().push(label.clone());
        } else {
            standalone.push(label.clone());
        }
    }

    let mut groups = BTreeMap::new();
    for (root, mut members) in buckets {
        if members.len() > 1 {
            members.sort();
            groups.insert(root, members);
        } else {
            standalone.extend(members);
        }
    }

    standalone.sort();
    TraitGroups { groups, standalone }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_groups_multi_word_variants() {
        let result = group_by_root(&labels(&["risk tolerant", "risk averse", "bold"]));
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups["risk"], vec!["risk averse", "risk tolerant"]);
        assert_eq!(result.standalone, vec!["bold"]);
    }

    #[test]
    fn test_single_word_joins_when_variation_exists() {
        let result = group_by_root(&labels(&["curious", "curious about people", "calm"]));
        assert_eq!(result.groups["curious"], vec!["curious", "curious about people"]);
        assert_eq!(result.standalone, vec!["calm"]);
    }

    #[test]
    fn test_singleton_bucket_is_demoted() {
        let result = group_by_root(&labels(&["deeply analytical", "bold", "calm"]));
        assert!(result.groups.is_empty());
        assert_eq!(result.standalone, vec!["bold", "calm", "deeply analytical"]);
    }

    #[test]
    fn test_hyphenated_root_is_cut() {
        let result = group_by_root(&labels(&["self-aware leader", "self reflection", "humble"]));
        assert_eq!(result.groups["self"], vec!["self reflection", "self-aware leader"]);
        assert_eq!(result.standalone, vec!["humble"]);
    }

    #[test]
    fn test_single_word_matches_hyphen_cut_variation_root() {
        let result = group_by_root(&labels(&["self", "self-aware leader"]));
        assert_eq!(result.groups["self"], vec!["self", "self-aware leader"]);
        assert!(result.standalone.is_empty());
    }

    #[test]
    fn test_single_hyphenated_word_without_variation_is_standalone() {
        let result = group_by_root(&labels(&["open-minded", "open-hearted", "calm"]));
        assert!(result.groups.is_empty());
        assert_eq!(result.standalone.len(), 3);
    }

    #[test]
    fn test_punctuation_stripped_from_root() {
        let result = group_by_root(&labels(&["\"bold\" moves", "bold choices"]));
        assert_eq!(result.groups["bold"].len(), 2);
    }

    #[test]
    fn test_empty_and_symbol_only_labels() {
        let result = group_by_root(&labels(&["", "   ", "!!! wow", "calm"]));
        assert!(result.groups.is_empty());
        assert_eq!(result.standalone, vec!["!!! wow", "calm"]);
    }

    #[test]
    fn test_deterministic() {
        let input = labels(&["b thing", "a thing", "b other", "a other", "z"]);
        assert_eq!(group_by_root(&input), group_by_root(&input));
        let mut reversed = input.clone();
        reversed.reverse();
        assert_eq!(group_by_root(&input), group_by_root(&reversed));
    }

    #[test]
    fn test_label_count_preserved() {
        let input = labels(&["risk averse", "risk tolerant", "risk", "bold", "warm heart"]);
        let groups = group_by_root(&input);
        let count = groups.groups.values().map(Vec::len).sum::<usize>() + groups.standalone.len();
        assert_eq!(count, input.len());
    }
}
