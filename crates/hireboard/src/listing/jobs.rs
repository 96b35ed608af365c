use serde::{Deserialize, Serialize};

use super::predicate::{contains_lowercase, FilterSet};
use crate::records::{EmploymentType, Job, JobStatus, WorkArrangement};

/// Candidate-side job browsing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearch {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub work_arrangement: Option<WorkArrangement>,
    /// Lower bound on the advertised maximum salary.
    #[serde(default)]
    pub minimum_salary: Option<u32>,
    #[serde(default)]
    pub include_closed: bool,
}

impl JobSearch {
    pub fn visible<'j>(&self, jobs: &'j [Job]) -> Vec<&'j Job> {
        let query = self.query.trim().to_lowercase();

        FilterSet::new()
            .require_if(!self.include_closed, |job: &Job| {
                job.status == JobStatus::Active
            })
            .require_if(!query.is_empty(), move |job: &Job| {
                contains_lowercase(&job.title, &query)
                    || contains_lowercase(&job.company, &query)
                    || job
                        .skills
                        .iter()
                        .any(|skill| contains_lowercase(skill, &query))
            })
            .when_text(&self.location, |location| {
                let location = location.to_lowercase();
                move |job: &Job| contains_lowercase(&job.location, &location)
            })
            .when_some(self.employment_type, |kind| {
                move |job: &Job| job.employment_type == kind
            })
            .when_some(self.work_arrangement, |arrangement| {
                move |job: &Job| job.work_arrangement == arrangement
            })
            .when_some(self.minimum_salary, |minimum| {
                move |job: &Job| {
                    job.salary
                        .as_ref()
                        .is_some_and(|salary| salary.max >= minimum)
                }
            })
            .apply(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::sample_jobs;

    fn ids(jobs: &[&Job]) -> Vec<String> {
        jobs.iter().map(|job| job.id.0.clone()).collect()
    }

    #[test]
    fn closed_postings_hidden_by_default() {
        let jobs = sample_jobs();
        assert_eq!(ids(&JobSearch::default().visible(&jobs)), vec!["job-1", "job-2"]);

        let search = JobSearch {
            include_closed: true,
            ..JobSearch::default()
        };
        assert_eq!(search.visible(&jobs).len(), 3);
    }

    #[test]
    fn query_covers_company_and_skills() {
        let jobs = sample_jobs();
        let search = JobSearch {
            query: "terraform".to_string(),
            ..JobSearch::default()
        };
        assert_eq!(ids(&search.visible(&jobs)), vec!["job-2"]);

        let search = JobSearch {
            query: "northwind".to_string(),
            include_closed: true,
            ..JobSearch::default()
        };
        assert_eq!(ids(&search.visible(&jobs)), vec!["job-1", "job-2"]);
    }

    #[test]
    fn structured_filters_combine() {
        let jobs = sample_jobs();
        let search = JobSearch {
            work_arrangement: Some(WorkArrangement::Remote),
            minimum_salary: Some(170_000),
            ..JobSearch::default()
        };
        assert_eq!(ids(&search.visible(&jobs)), vec!["job-2"]);

        let search = JobSearch {
            minimum_salary: Some(200_000),
            ..JobSearch::default()
        };
        assert!(search.visible(&jobs).is_empty());

        let search = JobSearch {
            employment_type: Some(EmploymentType::Internship),
            location: "new york".to_string(),
            include_closed: true,
            ..JobSearch::default()
        };
        assert_eq!(ids(&search.visible(&jobs)), vec!["job-3"]);
    }
}
