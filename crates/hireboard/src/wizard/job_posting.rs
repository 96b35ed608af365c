use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{EntryList, FieldErrors, TagSet};
use super::StepForm;
use crate::records::{EmploymentType, Job, JobId, JobStatus, SalaryRange, WorkArrangement};

const DEFAULT_CURRENCY: &str = "USD";
const TITLE_MAX_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPostingStep {
    Basics,
    Details,
    Compensation,
    Screening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Title,
    Department,
    Location,
    EmploymentType,
    WorkArrangement,
    Description,
    Requirements,
    Skills,
    SalaryMin,
    SalaryMax,
    Benefits,
    ScreeningQuestions,
    ApplicationDeadline,
}

impl JobField {
    pub const fn name(self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Department => "department",
            JobField::Location => "location",
            JobField::EmploymentType => "employment_type",
            JobField::WorkArrangement => "work_arrangement",
            JobField::Description => "description",
            JobField::Requirements => "requirements",
            JobField::Skills => "skills",
            JobField::SalaryMin => "salary_min",
            JobField::SalaryMax => "salary_max",
            JobField::Benefits => "benefits",
            JobField::ScreeningQuestions => "screening_questions",
            JobField::ApplicationDeadline => "application_deadline",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Employer job creation form, accumulated across four steps. Numeric and
/// date inputs stay as entered text until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPostingForm {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: Option<EmploymentType>,
    pub work_arrangement: Option<WorkArrangement>,
    pub description: String,
    pub requirements: EntryList,
    pub skills: TagSet,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
    pub benefits: TagSet,
    pub screening_questions: EntryList,
    pub application_deadline: String,
}

impl JobPostingForm {
    /// Prefills the form from an existing posting for editing.
    pub fn from_job(job: &Job) -> Self {
        let (salary_min, salary_max, currency) = match &job.salary {
            Some(salary) => (
                salary.min.to_string(),
                salary.max.to_string(),
                salary.currency.clone(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            employment_type: Some(job.employment_type),
            work_arrangement: Some(job.work_arrangement),
            description: job.description.clone(),
            requirements: job.requirements.iter().cloned().collect(),
            skills: job.skills.iter().collect(),
            salary_min,
            salary_max,
            currency,
            benefits: job.benefits.iter().collect(),
            screening_questions: job.screening_questions.iter().cloned().collect(),
            application_deadline: job
                .application_deadline
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Builds the posting from a completed form; `None` when a required typed
    /// value is missing or unparseable.
    pub fn to_job(&self, id: JobId, company: &str, posted_on: NaiveDate) -> Option<Job> {
        let salary = match self.salary_band() {
            Ok(band) => band,
            Err(_) => return None,
        };
        let application_deadline = match parse_optional_date(&self.application_deadline) {
            Ok(date) => date,
            Err(()) => return None,
        };

        Some(Job {
            id,
            title: self.title.trim().to_string(),
            company: company.to_string(),
            department: self.department.trim().to_string(),
            location: self.location.trim().to_string(),
            employment_type: self.employment_type?,
            work_arrangement: self.work_arrangement?,
            salary,
            description: self.description.trim().to_string(),
            requirements: self.requirements.filled(),
            skills: self.skills.to_vec(),
            benefits: self.benefits.to_vec(),
            screening_questions: self.screening_questions.filled(),
            posted_on,
            application_deadline,
            status: JobStatus::Active,
        })
    }

    /// Parsed salary band; both bounds blank means "not advertised".
    fn salary_band(&self) -> Result<Option<SalaryRange>, FieldErrors<JobField>> {
        let mut errors = FieldErrors::new();
        let min_raw = self.salary_min.trim();
        let max_raw = self.salary_max.trim();
        if min_raw.is_empty() && max_raw.is_empty() {
            return Ok(None);
        }

        let min = parse_amount(min_raw);
        let max = parse_amount(max_raw);
        if min.is_none() {
            errors.insert(JobField::SalaryMin, "Enter a valid minimum salary");
        }
        if max.is_none() {
            errors.insert(JobField::SalaryMax, "Enter a valid maximum salary");
        }

        match (min, max) {
            (Some(min), Some(max)) if min <= max => {
                let currency = match self.currency.trim() {
                    "" => DEFAULT_CURRENCY.to_string(),
                    other => other.to_ascii_uppercase(),
                };
                Ok(Some(SalaryRange { min, max, currency }))
            }
            (Some(_), Some(_)) => {
                errors.insert(
                    JobField::SalaryMax,
                    "Maximum salary must be at least the minimum",
                );
                Err(errors)
            }
            _ => Err(errors),
        }
    }
}

impl StepForm for JobPostingForm {
    type Step = JobPostingStep;
    type Field = JobField;

    const STEPS: &'static [JobPostingStep] = &[
        JobPostingStep::Basics,
        JobPostingStep::Details,
        JobPostingStep::Compensation,
        JobPostingStep::Screening,
    ];

    fn validate_step(&self, step: JobPostingStep) -> FieldErrors<JobField> {
        let mut errors = FieldErrors::new();
        match step {
            JobPostingStep::Basics => {
                errors.require_text(JobField::Title, &self.title, "Job title is required");
                if self.title.trim().chars().count() > TITLE_MAX_LEN {
                    errors.insert(
                        JobField::Title,
                        format!("Job title must be at most {TITLE_MAX_LEN} characters"),
                    );
                }
                errors.require_text(
                    JobField::Department,
                    &self.department,
                    "Department is required",
                );
                errors.require_text(JobField::Location, &self.location, "Location is required");
                if self.employment_type.is_none() {
                    errors.insert(JobField::EmploymentType, "Select an employment type");
                }
                if self.work_arrangement.is_none() {
                    errors.insert(JobField::WorkArrangement, "Select a work arrangement");
                }
            }
            JobPostingStep::Details => {
                errors.require_text(
                    JobField::Description,
                    &self.description,
                    "Job description is required",
                );
                if self.requirements.filled().is_empty() {
                    errors.insert(JobField::Requirements, "Add at least one requirement");
                }
                if self.skills.is_empty() {
                    errors.insert(JobField::Skills, "Add at least one skill");
                }
            }
            JobPostingStep::Compensation => {
                if let Err(salary_errors) = self.salary_band() {
                    for (field, message) in salary_errors.iter() {
                        errors.insert(field, message);
                    }
                }
            }
            JobPostingStep::Screening => {
                if self.screening_questions.has_blank() {
                    errors.insert(
                        JobField::ScreeningQuestions,
                        "Screening questions cannot be blank",
                    );
                }
                if parse_optional_date(&self.application_deadline).is_err() {
                    errors.insert(
                        JobField::ApplicationDeadline,
                        "Use the YYYY-MM-DD format for the deadline",
                    );
                }
            }
        }
        errors
    }
}

fn parse_amount(raw: &str) -> Option<u32> {
    raw.replace([',', '_'], "").parse().ok()
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ())
}
