//! How a field's options are laid out for selection
//!
//! Groupable fields with large vocabularies are shown grouped by root word;
//! everything else is paginated. Selection markers are computed from the
//! profile each time options are rendered, so they never go stale.

use serde::Serialize;
use std::collections::BTreeMap;

use super::grouping::{TraitGroups, group_by_root};
use crate::persona::{Field, Profile};

/// Vocabularies at least this long are grouped (when the field allows it)
pub const GROUPING_THRESHOLD: usize = 25;

/// Options shown before "show all" in paginated layouts
pub const INITIAL_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum OptionLayout {
    Grouped {
        groups: TraitGroups,
        /// Roots to show expanded (set by searching)
        expanded: Vec<String>,
    },
    Paged {
        visible: Vec<String>,
        hidden: Vec<String>,
    },
}

impl OptionLayout {
    pub fn for_field(field: Field, labels: &[String]) -> Self {
        if field.groupable() && labels.len() >= GROUPING_THRESHOLD {
            let groups = group_by_root(labels);
            log::debug!(
                "{}: grouped display, {} groups, {} standalone",
                field,
                groups.groups.len(),
                groups.standalone.len()
            );
            OptionLayout::Grouped {
                groups,
                expanded: Vec::new(),
            }
        } else {
            let split = labels.len().min(INITIAL_PAGE_SIZE);
            OptionLayout::Paged {
                visible: labels[..split].to_vec(),
                hidden: labels[split..].to_vec(),
            }
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, OptionLayout::Grouped { .. })
    }

    /// Reveal every option (the "show all" action)
    pub fn show_all(self) -> Self {
        match self {
            OptionLayout::Paged { mut visible, hidden } => {
                visible.extend(hidden);
                OptionLayout::Paged {
                    visible,
                    hidden: Vec::new(),
                }
            }
            OptionLayout::Grouped { groups, .. } => {
                let expanded = groups.groups.keys().cloned().collect();
                OptionLayout::Grouped { groups, expanded }
            }
        }
    }

    /// Case-insensitive substring search.
    ///
    /// Matching groups are expanded and keep only their matching members,
    /// or all members when only the root word matched. Paginated layouts
    /// show every match.
    pub fn filter(self, term: &str) -> Self {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self;
        }
        let hit = |label: &String| label.to_lowercase().contains(&term);

        match self {
            OptionLayout::Grouped { groups, .. } => {
                let mut kept = BTreeMap::new();
                for (root, members) in groups.groups {
                    let hits: Vec<String> = members.iter().filter(|m| hit(*m)).cloned().collect();
                    if !hits.is_empty() {
                        kept.insert(root, hits);
                    } else if root.contains(&term) {
                        kept.insert(root, members);
                    }
                }
                let standalone = groups.standalone.into_iter().filter(|l| hit(l)).collect();
                let expanded = kept.keys().cloned().collect();
                OptionLayout::Grouped {
                    groups: TraitGroups {
                        groups: kept,
                        standalone,
                    },
                    expanded,
                }
            }
            OptionLayout::Paged { visible, hidden } => OptionLayout::Paged {
                visible: visible.into_iter().chain(hidden).filter(|l| hit(l)).collect(),
                hidden: Vec::new(),
            },
        }
    }
}

/// One selectable option with its current selection marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub label: String,
    pub selected: bool,
}

/// A labelled block of options as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionBlock {
    /// Root word for groups, `None` for standalone/paged options
    pub heading: Option<String>,
    pub expanded: bool,
    pub options: Vec<OptionEntry>,
}

/// Materialize a layout against the current profile
pub fn render_options(layout: &OptionLayout, profile: &Profile, field: Field) -> Vec<OptionBlock> {
    let entry = |label: &String| OptionEntry {
        label: label.clone(),
        selected: profile.is_selected(field, label),
    };

    match layout {
        OptionLayout::Grouped { groups, expanded } => {
            let mut blocks: Vec<OptionBlock> = groups
                .groups
                .iter()
                .map(|(root, members)| OptionBlock {
                    heading: Some(root.clone()),
                    expanded: expanded.contains(root),
                    options: members.iter().map(entry).collect(),
                })
                .collect();
            blocks.push(OptionBlock {
                heading: None,
                expanded: true,
                options: groups.standalone.iter().map(entry).collect(),
            });
            blocks
        }
        OptionLayout::Paged { visible, .. } => vec![OptionBlock {
            heading: None,
            expanded: true,
            options: visible.iter().map(entry).collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{} {:03}", prefix, i)).collect()
    }

    #[test]
    fn test_short_list_is_paged() {
        let labels = numbered("risk", 24);
        let layout = OptionLayout::for_field(Field::PrimaryTraits, &labels);
        assert!(!layout.is_grouped());
    }

    #[test]
    fn test_non_groupable_field_is_paged() {
        let labels = numbered("risk", 80);
        let layout = OptionLayout::for_field(Field::CognitiveStyle, &labels);
        match layout {
            OptionLayout::Paged { visible, hidden } => {
                assert_eq!(visible.len(), INITIAL_PAGE_SIZE);
                assert_eq!(hidden.len(), 30);
            }
            other => panic!("expected paged layout, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_groups() {
        let labels = numbered("risk", GROUPING_THRESHOLD);
        let layout = OptionLayout::for_field(Field::PrimaryTraits, &labels);
        assert!(layout.is_grouped());
    }

    #[test]
    fn test_show_all_reveals_hidden() {
        let labels = numbered("x", 60);
        let layout = OptionLayout::for_field(Field::CrisisResponse, &labels).show_all();
        match layout {
            OptionLayout::Paged { visible, hidden } => {
                assert_eq!(visible.len(), 60);
                assert!(hidden.is_empty());
            }
            other => panic!("expected paged layout, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_grouped_expands_matches() {
        let mut labels = numbered("risk", 20);
        labels.extend(numbered("calm", 10));
        labels.push("bold".to_string());
        let layout = OptionLayout::for_field(Field::PrimaryTraits, &labels).filter("CALM 00");

        match layout {
            OptionLayout::Grouped { groups, expanded } => {
                assert_eq!(groups.groups.len(), 1);
                assert_eq!(groups.groups["calm"].len(), 10);
                assert_eq!(expanded, vec!["calm".to_string()]);
                assert!(groups.standalone.is_empty());
            }
            other => panic!("expected grouped layout, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_paged_lifts_pagination() {
        let labels = numbered("x", 70);
        let layout = OptionLayout::for_field(Field::CrisisResponse, &labels).filter("x 06");
        match layout {
            OptionLayout::Paged { visible, hidden } => {
                assert_eq!(visible, (60..70).map(|i| format!("x {:03}", i)).collect::<Vec<_>>());
                assert!(hidden.is_empty());
            }
            other => panic!("expected paged layout, got {:?}", other),
        }
    }

    #[test]
    fn test_render_marks_selection_from_profile() {
        let labels = vec!["bold".to_string(), "calm".to_string()];
        let layout = OptionLayout::for_field(Field::PrimaryTraits, &labels);
        let mut profile = Profile::default();
        profile.toggle(Field::PrimaryTraits, "calm").unwrap();

        let blocks = render_options(&layout, &profile, Field::PrimaryTraits);
        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].options[0].selected);
        assert!(blocks[0].options[1].selected);

        profile.reset();
        let blocks = render_options(&layout, &profile, Field::PrimaryTraits);
        assert!(blocks[0].options.iter().all(|o| !o.selected));
    }
}
