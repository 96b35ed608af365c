pub mod domain;
pub mod fixtures;
pub mod roster;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, EmploymentType,
    Interview, InterviewId, InterviewKind, Job, JobId, JobStatus, SalaryRange, WorkArrangement,
};
pub use roster::{CandidateRosterImporter, RosterImportError};
