use serde::Serialize;

use super::page::{PageType, Perspective};
use crate::records::{Application, JobId};

/// The page chosen by the router together with the props it consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum PageView {
    Home,
    Jobs,
    JobDetail {
        job_id: Option<JobId>,
    },
    Applications,
    Interviews,
    Inbox,
    Analytics,
    Profile,
    Settings,
    EmployerHome,
    EmployerJobs,
    EmployerJobDetail {
        job_id: Option<JobId>,
    },
    EmployerJobCreation,
    EmployerApplications {
        job_title_filter: Option<String>,
    },
    EmployerApplicationDetail {
        application: Option<Box<Application>>,
    },
    EmployerCandidates,
    EmployerInterviews,
    EmployerInterviewCreation,
    EmployerInbox,
    EmployerAnalytics,
    EmployerSettings,
    /// Rendered for identifiers that name no known page.
    NotFound {
        identifier: String,
    },
}

impl PageView {
    pub fn page(&self) -> Option<PageType> {
        let page = match self {
            PageView::Home => PageType::Home,
            PageView::Jobs => PageType::Jobs,
            PageView::JobDetail { .. } => PageType::JobDetail,
            PageView::Applications => PageType::Applications,
            PageView::Interviews => PageType::Interviews,
            PageView::Inbox => PageType::Inbox,
            PageView::Analytics => PageType::Analytics,
            PageView::Profile => PageType::Profile,
            PageView::Settings => PageType::Settings,
            PageView::EmployerHome => PageType::EmployerHome,
            PageView::EmployerJobs => PageType::EmployerJobs,
            PageView::EmployerJobDetail { .. } => PageType::EmployerJobDetail,
            PageView::EmployerJobCreation => PageType::EmployerJobCreation,
            PageView::EmployerApplications { .. } => PageType::EmployerApplications,
            PageView::EmployerApplicationDetail { .. } => PageType::EmployerApplicationDetail,
            PageView::EmployerCandidates => PageType::EmployerCandidates,
            PageView::EmployerInterviews => PageType::EmployerInterviews,
            PageView::EmployerInterviewCreation => PageType::EmployerInterviewCreation,
            PageView::EmployerInbox => PageType::EmployerInbox,
            PageView::EmployerAnalytics => PageType::EmployerAnalytics,
            PageView::EmployerSettings => PageType::EmployerSettings,
            PageView::NotFound { .. } => return None,
        };
        Some(page)
    }
}

/// Page dispatch plus the selection state that outlives a single page.
#[derive(Debug, Clone)]
pub struct PageRouter {
    current: PageType,
    history: Vec<PageType>,
    selected_job: Option<JobId>,
    job_title_filter: Option<String>,
    selected_application: Option<Application>,
}

impl PageRouter {
    pub fn new(initial: PageType) -> Self {
        Self {
            current: initial,
            history: vec![initial],
            selected_job: None,
            job_title_filter: None,
            selected_application: None,
        }
    }

    pub fn current(&self) -> PageType {
        self.current
    }

    pub fn history(&self) -> &[PageType] {
        &self.history
    }

    pub fn selected_job(&self) -> Option<&JobId> {
        self.selected_job.as_ref()
    }

    pub fn job_title_filter(&self) -> Option<&str> {
        self.job_title_filter.as_deref()
    }

    pub fn selected_application(&self) -> Option<&Application> {
        self.selected_application.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Moves to `page`. Returns `false` when already there; the history only
    /// records distinct transitions.
    pub fn navigate(&mut self, page: PageType) -> bool {
        if self.current == page {
            return false;
        }

        tracing::debug!(from = %self.current, to = %page, "page transition");
        self.current = page;
        self.history.push(page);
        self.drop_irrelevant_selection();
        true
    }

    /// Returns to the previous page, if any.
    pub fn back(&mut self) -> Option<PageType> {
        if !self.can_go_back() {
            return None;
        }

        self.history.pop();
        let previous = *self.history.last()?;
        tracing::debug!(from = %self.current, to = %previous, "page back");
        self.current = previous;
        self.drop_irrelevant_selection();
        Some(previous)
    }

    pub fn open_job(&mut self, perspective: Perspective, job_id: JobId) {
        self.selected_job = Some(job_id);
        self.navigate(perspective.job_detail());
    }

    /// Opens the employer applications list narrowed to one job title.
    pub fn view_applications_for(&mut self, job_title: impl Into<String>) {
        self.navigate(PageType::EmployerApplications);
        self.job_title_filter = Some(job_title.into());
    }

    pub fn clear_job_title_filter(&mut self) {
        self.job_title_filter = None;
    }

    pub fn open_application(&mut self, application: Application) {
        self.selected_application = Some(application);
        self.navigate(PageType::EmployerApplicationDetail);
    }

    /// Pure: repeated renders never touch the history.
    pub fn render(&self) -> PageView {
        match self.current {
            PageType::Home => PageView::Home,
            PageType::Jobs => PageView::Jobs,
            PageType::JobDetail => PageView::JobDetail {
                job_id: self.selected_job.clone(),
            },
            PageType::Applications => PageView::Applications,
            PageType::Interviews => PageView::Interviews,
            PageType::Inbox => PageView::Inbox,
            PageType::Analytics => PageView::Analytics,
            PageType::Profile => PageView::Profile,
            PageType::Settings => PageView::Settings,
            PageType::EmployerHome => PageView::EmployerHome,
            PageType::EmployerJobs => PageView::EmployerJobs,
            PageType::EmployerJobDetail => PageView::EmployerJobDetail {
                job_id: self.selected_job.clone(),
            },
            PageType::EmployerJobCreation => PageView::EmployerJobCreation,
            PageType::EmployerApplications => PageView::EmployerApplications {
                job_title_filter: self.job_title_filter.clone(),
            },
            PageType::EmployerApplicationDetail => PageView::EmployerApplicationDetail {
                application: self.selected_application.clone().map(Box::new),
            },
            PageType::EmployerCandidates => PageView::EmployerCandidates,
            PageType::EmployerInterviews => PageView::EmployerInterviews,
            PageType::EmployerInterviewCreation => PageView::EmployerInterviewCreation,
            PageType::EmployerInbox => PageView::EmployerInbox,
            PageType::EmployerAnalytics => PageView::EmployerAnalytics,
            PageType::EmployerSettings => PageView::EmployerSettings,
        }
    }

    /// Raw identifier entry point. Unknown ids yield `PageView::NotFound`
    /// and leave the router untouched.
    pub fn navigate_to_identifier(&mut self, identifier: &str) -> PageView {
        match identifier.parse::<PageType>() {
            Ok(page) => {
                self.navigate(page);
                self.render()
            }
            Err(err) => {
                tracing::warn!(%err, "navigation to unknown page");
                PageView::NotFound {
                    identifier: identifier.trim().to_string(),
                }
            }
        }
    }

    fn drop_irrelevant_selection(&mut self) {
        if self.current != PageType::EmployerApplications {
            self.job_title_filter = None;
        }
        if self.current != PageType::EmployerApplicationDetail {
            self.selected_application = None;
        }
    }
}
