use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::predicate::{contains_lowercase, FilterSet};
use crate::records::{Application, ApplicationStatus};

/// Employer-side application list criteria. `job_title` is the filter the
/// router hands over when arriving from a job's "view applications" action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSearch {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub minimum_match: Option<u8>,
}

impl ApplicationSearch {
    pub fn for_job_title(job_title: Option<&str>) -> Self {
        Self {
            job_title: job_title.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn visible<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        let query = self.query.trim().to_lowercase();

        FilterSet::new()
            .require_if(!query.is_empty(), move |application: &Application| {
                contains_lowercase(&application.candidate_name, &query)
                    || contains_lowercase(&application.job_title, &query)
            })
            .when_some(self.status, |status| {
                move |application: &Application| application.status == status
            })
            .when_text(&self.job_title, |title| {
                let title = title.to_string();
                move |application: &Application| application.job_title == title
            })
            .when_some(self.minimum_match, |minimum| {
                move |application: &Application| {
                    application.match_score.is_some_and(|score| score >= minimum)
                }
            })
            .apply(applications)
    }
}

/// Number of applications per pipeline stage; every stage is present.
pub fn stage_counts(applications: &[Application]) -> BTreeMap<ApplicationStatus, usize> {
    let mut counts: BTreeMap<ApplicationStatus, usize> = ApplicationStatus::ALL
        .into_iter()
        .map(|status| (status, 0))
        .collect();
    for application in applications {
        *counts.entry(application.status).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::sample_applications;

    fn ids(applications: &[&Application]) -> Vec<String> {
        applications
            .iter()
            .map(|application| application.id.0.clone())
            .collect()
    }

    #[test]
    fn job_title_handover_narrows_list() {
        let applications = sample_applications();
        let search = ApplicationSearch::for_job_title(Some("Platform Engineer"));
        assert_eq!(ids(&search.visible(&applications)), vec!["app-2", "app-4"]);

        let search = ApplicationSearch::for_job_title(None);
        assert_eq!(search.visible(&applications).len(), 4);
    }

    #[test]
    fn status_query_and_score_filters() {
        let applications = sample_applications();
        let search = ApplicationSearch {
            query: "senior".to_string(),
            status: Some(ApplicationStatus::Interview),
            ..ApplicationSearch::default()
        };
        assert_eq!(ids(&search.visible(&applications)), vec!["app-1"]);

        let search = ApplicationSearch {
            minimum_match: Some(80),
            ..ApplicationSearch::default()
        };
        assert_eq!(ids(&search.visible(&applications)), vec!["app-1", "app-2"]);
    }

    #[test]
    fn stage_counts_include_empty_stages() {
        let counts = stage_counts(&sample_applications());
        assert_eq!(counts.len(), ApplicationStatus::ALL.len());
        assert_eq!(counts[&ApplicationStatus::Interview], 1);
        assert_eq!(counts[&ApplicationStatus::Hired], 0);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }
}
