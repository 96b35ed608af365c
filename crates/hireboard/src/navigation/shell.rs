use super::page::{PageType, Perspective};
use super::router::{PageRouter, PageView};
use super::tabs::{TabContentProvider, ViewScope};
use crate::records::{Application, JobId};

/// Top-level navigation state: router plus the tab provider of the mounted
/// page. Every router transition is followed by a tab sync, so the tab is
/// already reset when the next view is rendered.
#[derive(Debug, Clone)]
pub struct AppShell {
    router: PageRouter,
    tabs: TabContentProvider,
}

impl AppShell {
    pub fn new(perspective: Perspective) -> Self {
        Self::starting_at(perspective.home())
    }

    pub fn starting_at(page: PageType) -> Self {
        Self {
            router: PageRouter::new(page),
            tabs: TabContentProvider::new(page),
        }
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn current_page(&self) -> PageType {
        self.router.current()
    }

    pub fn perspective(&self) -> Perspective {
        self.router.current().perspective()
    }

    pub fn active_tab(&self) -> &str {
        self.tabs.active_tab()
    }

    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.tabs.set_active_tab(tab);
    }

    /// Scope handed to the mounted page; writes go straight to the shell's
    /// tab state.
    pub fn view_scope(&mut self) -> ViewScope<'_> {
        ViewScope::with_tabs(&mut self.tabs)
    }

    pub fn render(&self) -> PageView {
        self.router.render()
    }

    pub fn navigate(&mut self, page: PageType) -> bool {
        let moved = self.router.navigate(page);
        self.sync_tabs();
        moved
    }

    pub fn navigate_to_identifier(&mut self, identifier: &str) -> PageView {
        let view = self.router.navigate_to_identifier(identifier);
        self.sync_tabs();
        view
    }

    pub fn back(&mut self) -> Option<PageType> {
        let page = self.router.back();
        self.sync_tabs();
        page
    }

    pub fn open_job(&mut self, job_id: JobId) {
        let perspective = self.perspective();
        self.router.open_job(perspective, job_id);
        self.sync_tabs();
    }

    pub fn view_applications_for(&mut self, job_title: impl Into<String>) {
        self.router.view_applications_for(job_title);
        self.sync_tabs();
    }

    pub fn open_application(&mut self, application: Application) {
        self.router.open_application(application);
        self.sync_tabs();
    }

    /// Jumps to the home page of the other side of the marketplace.
    pub fn switch_perspective(&mut self, perspective: Perspective) -> bool {
        if self.perspective() == perspective {
            return false;
        }
        tracing::info!(?perspective, "perspective switched");
        self.navigate(perspective.home())
    }

    fn sync_tabs(&mut self) {
        if self.tabs.sync_page(self.router.current()) {
            tracing::debug!(
                page = %self.router.current(),
                tab = self.tabs.active_tab(),
                "tab reset"
            );
        }
    }
}
