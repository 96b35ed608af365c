use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::predicate::{active_value, contains_lowercase, leading_number, FilterSet};
use crate::records::{Candidate, CandidateId};

/// Top-level tabs of the candidate marketplace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketplaceTab {
    #[default]
    All,
    Saved,
}

/// Sidebar filters. Empty strings and `"all"` leave a field unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilters {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub remote_preference: String,
}

/// Bookmarked candidate ids; the only record of "saved" status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmarks {
    ids: BTreeSet<CandidateId>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership; returns `true` when the candidate is now saved.
    pub fn toggle(&mut self, id: CandidateId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: CandidateId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CandidateId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<CandidateId> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = CandidateId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Everything the marketplace page holds to derive its visible list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSearch {
    #[serde(default)]
    pub tab: MarketplaceTab,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub active_only: bool,
    #[serde(default)]
    pub filters: CandidateFilters,
}

impl CandidateSearch {
    pub fn visible<'c>(
        &self,
        candidates: &'c [Candidate],
        bookmarks: &Bookmarks,
    ) -> Vec<&'c Candidate> {
        if self.tab == MarketplaceTab::Saved {
            return candidates
                .iter()
                .filter(|candidate| bookmarks.contains(candidate.id))
                .collect();
        }

        self.filter_set().apply(candidates)
    }

    fn filter_set(&self) -> FilterSet<'_, Candidate> {
        let query = self.query.trim().to_lowercase();
        let skills: Vec<String> = self
            .filters
            .skills
            .iter()
            .filter_map(|skill| active_value(skill))
            .map(str::to_lowercase)
            .collect();
        let minimum_years = active_value(&self.filters.experience).and_then(leading_number);

        FilterSet::new()
            .require_if(!query.is_empty(), move |candidate: &Candidate| {
                matches_query(candidate, &query)
            })
            .require_if(self.active_only, |candidate: &Candidate| {
                candidate.last_active.contains("hours")
            })
            .when_text(&self.filters.availability, |availability| {
                let availability = availability.to_string();
                move |candidate: &Candidate| candidate.availability.contains(&availability)
            })
            .when_some(minimum_years, |minimum| {
                move |candidate: &Candidate| {
                    leading_number(&candidate.experience).is_some_and(|years| years >= minimum)
                }
            })
            .when_text(&self.filters.location, |location| {
                let location = location.to_lowercase();
                move |candidate: &Candidate| contains_lowercase(&candidate.location, &location)
            })
            .require_if(!skills.is_empty(), move |candidate: &Candidate| {
                skills.iter().all(|wanted| {
                    candidate
                        .skills
                        .iter()
                        .any(|skill| skill.to_lowercase() == *wanted)
                })
            })
            .when_text(&self.filters.remote_preference, |preference| {
                let preference = preference.to_string();
                move |candidate: &Candidate| {
                    candidate
                        .remote_preference
                        .as_deref()
                        .is_some_and(|value| value.eq_ignore_ascii_case(&preference))
                }
            })
    }
}

fn matches_query(candidate: &Candidate, query: &str) -> bool {
    contains_lowercase(&candidate.name, query)
        || contains_lowercase(&candidate.title, query)
        || candidate
            .skills
            .iter()
            .any(|skill| contains_lowercase(skill, query))
        || contains_lowercase(&candidate.bio, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::sample_candidates;

    fn ids(candidates: &[&Candidate]) -> Vec<u32> {
        candidates.iter().map(|candidate| candidate.id.0).collect()
    }

    #[test]
    fn empty_search_returns_everyone() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            filters: CandidateFilters {
                availability: "all".to_string(),
                experience: "all".to_string(),
                remote_preference: "all".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        let visible = search.visible(&candidates, &Bookmarks::new());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4]);
    }

    #[test]
    fn query_and_experience_are_combined() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            query: "AWS".to_string(),
            filters: CandidateFilters {
                experience: "5".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert_eq!(ids(&search.visible(&candidates, &Bookmarks::new())), vec![1]);

        let search = CandidateSearch {
            query: "react".to_string(),
            filters: CandidateFilters {
                experience: "5+ years".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert_eq!(ids(&search.visible(&candidates, &Bookmarks::new())), vec![1]);
    }

    #[test]
    fn query_matches_bio_text() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            query: "forecasting".to_string(),
            ..CandidateSearch::default()
        };
        assert_eq!(ids(&search.visible(&candidates, &Bookmarks::new())), vec![4]);
    }

    #[test]
    fn active_only_requires_hours_label() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            active_only: true,
            ..CandidateSearch::default()
        };
        assert_eq!(
            ids(&search.visible(&candidates, &Bookmarks::new())),
            vec![1, 3]
        );
    }

    #[test]
    fn availability_uses_substring_match() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            filters: CandidateFilters {
                availability: "Available in".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert_eq!(
            ids(&search.visible(&candidates, &Bookmarks::new())),
            vec![2, 3]
        );
    }

    #[test]
    fn location_skills_and_remote_filters_narrow_results() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            filters: CandidateFilters {
                skills: vec!["aws".to_string(), "all".to_string()],
                remote_preference: "remote".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert_eq!(ids(&search.visible(&candidates, &Bookmarks::new())), vec![1]);

        let search = CandidateSearch {
            filters: CandidateFilters {
                location: "seattle".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert_eq!(ids(&search.visible(&candidates, &Bookmarks::new())), vec![4]);
    }

    #[test]
    fn unparseable_experience_filter_is_ignored() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            filters: CandidateFilters {
                experience: "senior".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert_eq!(search.visible(&candidates, &Bookmarks::new()).len(), 4);
    }

    #[test]
    fn out_of_range_experience_filter_still_applies() {
        let candidates = sample_candidates();
        let search = CandidateSearch {
            filters: CandidateFilters {
                experience: "99999999999".to_string(),
                ..CandidateFilters::default()
            },
            ..CandidateSearch::default()
        };
        assert!(search.visible(&candidates, &Bookmarks::new()).is_empty());
    }

    #[test]
    fn saved_tab_ignores_other_filters() {
        let candidates = sample_candidates();
        let bookmarks: Bookmarks = [CandidateId(2), CandidateId(4), CandidateId(99)]
            .into_iter()
            .collect();
        let search = CandidateSearch {
            tab: MarketplaceTab::Saved,
            query: "designer".to_string(),
            active_only: true,
            filters: CandidateFilters {
                experience: "10".to_string(),
                ..CandidateFilters::default()
            },
        };
        assert_eq!(ids(&search.visible(&candidates, &bookmarks)), vec![2, 4]);
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut bookmarks: Bookmarks = [CandidateId(3)].into_iter().collect();
        let before = bookmarks.clone();

        assert!(bookmarks.toggle(CandidateId(1)));
        assert!(!bookmarks.toggle(CandidateId(1)));
        assert_eq!(bookmarks, before);

        assert!(!bookmarks.toggle(CandidateId(3)));
        assert!(bookmarks.toggle(CandidateId(3)));
        assert_eq!(bookmarks, before);
    }
}
