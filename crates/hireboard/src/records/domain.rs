use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for marketplace candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Candidate profile as listed in the employer-side marketplace.
///
/// The descriptive labels (`experience`, `availability`, `last_active`) are kept
/// as display strings; filters parse what they need out of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub experience: String,
    pub availability: String,
    pub last_active: String,
    #[serde(default)]
    pub remote_preference: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkArrangement {
    OnSite,
    Remote,
    Hybrid,
}

impl WorkArrangement {
    pub const fn label(self) -> &'static str {
        match self {
            WorkArrangement::OnSite => "On-site",
            WorkArrangement::Remote => "Remote",
            WorkArrangement::Hybrid => "Hybrid",
        }
    }
}

/// Yearly compensation band advertised on a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Active,
    Paused,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub work_arrangement: WorkArrangement,
    pub salary: Option<SalaryRange>,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub benefits: Vec<String>,
    pub screening_questions: Vec<String>,
    pub posted_on: NaiveDate,
    pub application_deadline: Option<NaiveDate>,
    pub status: JobStatus,
}

/// Pipeline stage of an application, in hiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Screening => "screening",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Application linking a candidate to a job. `job_title` is denormalized so
/// list pages can filter without a job lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub job_id: JobId,
    pub job_title: String,
    pub status: ApplicationStatus,
    pub applied_on: NaiveDate,
    pub match_score: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewKind {
    Phone,
    Video,
    Onsite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub job_id: JobId,
    pub job_title: String,
    pub kind: InterviewKind,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u16,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub interviewers: Vec<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_status_labels_round_trip() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(
            ApplicationStatus::from_label(" Offer "),
            Some(ApplicationStatus::Offer)
        );
        assert_eq!(ApplicationStatus::from_label("ghosted"), None);
    }

    #[test]
    fn employment_type_serializes_kebab_case() {
        let value = serde_json::to_value(EmploymentType::FullTime).expect("serializes");
        assert_eq!(value, serde_json::json!("full-time"));
    }
}
