use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::NavigationError;

/// Which side of the marketplace the user is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    Candidate,
    Employer,
}

impl Perspective {
    pub const fn home(self) -> PageType {
        match self {
            Perspective::Candidate => PageType::Home,
            Perspective::Employer => PageType::EmployerHome,
        }
    }

    pub const fn job_detail(self) -> PageType {
        match self {
            Perspective::Candidate => PageType::JobDetail,
            Perspective::Employer => PageType::EmployerJobDetail,
        }
    }

    pub const fn applications(self) -> PageType {
        match self {
            Perspective::Candidate => PageType::Applications,
            Perspective::Employer => PageType::EmployerApplications,
        }
    }
}

/// Top-level screen identifier. Serialized as the camelCase page id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageType {
    Home,
    Jobs,
    JobDetail,
    Applications,
    Interviews,
    Inbox,
    Analytics,
    Profile,
    Settings,
    EmployerHome,
    EmployerJobs,
    EmployerJobDetail,
    EmployerJobCreation,
    EmployerApplications,
    EmployerApplicationDetail,
    EmployerCandidates,
    EmployerInterviews,
    EmployerInterviewCreation,
    EmployerInbox,
    EmployerAnalytics,
    EmployerSettings,
}

impl PageType {
    pub const ALL: [PageType; 21] = [
        PageType::Home,
        PageType::Jobs,
        PageType::JobDetail,
        PageType::Applications,
        PageType::Interviews,
        PageType::Inbox,
        PageType::Analytics,
        PageType::Profile,
        PageType::Settings,
        PageType::EmployerHome,
        PageType::EmployerJobs,
        PageType::EmployerJobDetail,
        PageType::EmployerJobCreation,
        PageType::EmployerApplications,
        PageType::EmployerApplicationDetail,
        PageType::EmployerCandidates,
        PageType::EmployerInterviews,
        PageType::EmployerInterviewCreation,
        PageType::EmployerInbox,
        PageType::EmployerAnalytics,
        PageType::EmployerSettings,
    ];

    pub const fn identifier(self) -> &'static str {
        match self {
            PageType::Home => "home",
            PageType::Jobs => "jobs",
            PageType::JobDetail => "jobDetail",
            PageType::Applications => "applications",
            PageType::Interviews => "interviews",
            PageType::Inbox => "inbox",
            PageType::Analytics => "analytics",
            PageType::Profile => "profile",
            PageType::Settings => "settings",
            PageType::EmployerHome => "employerHome",
            PageType::EmployerJobs => "employerJobs",
            PageType::EmployerJobDetail => "employerJobDetail",
            PageType::EmployerJobCreation => "employerJobCreation",
            PageType::EmployerApplications => "employerApplications",
            PageType::EmployerApplicationDetail => "employerApplicationDetail",
            PageType::EmployerCandidates => "employerCandidates",
            PageType::EmployerInterviews => "employerInterviews",
            PageType::EmployerInterviewCreation => "employerInterviewCreation",
            PageType::EmployerInbox => "employerInbox",
            PageType::EmployerAnalytics => "employerAnalytics",
            PageType::EmployerSettings => "employerSettings",
        }
    }

    pub const fn perspective(self) -> Perspective {
        match self {
            PageType::Home
            | PageType::Jobs
            | PageType::JobDetail
            | PageType::Applications
            | PageType::Interviews
            | PageType::Inbox
            | PageType::Analytics
            | PageType::Profile
            | PageType::Settings => Perspective::Candidate,
            PageType::EmployerHome
            | PageType::EmployerJobs
            | PageType::EmployerJobDetail
            | PageType::EmployerJobCreation
            | PageType::EmployerApplications
            | PageType::EmployerApplicationDetail
            | PageType::EmployerCandidates
            | PageType::EmployerInterviews
            | PageType::EmployerInterviewCreation
            | PageType::EmployerInbox
            | PageType::EmployerAnalytics
            | PageType::EmployerSettings => Perspective::Employer,
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for PageType {
    type Err = NavigationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.identifier() == trimmed)
            .ok_or_else(|| NavigationError::UnknownPage(trimmed.to_string()))
    }
}
