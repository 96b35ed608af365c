use super::page::PageType;
use super::NavigationError;

pub const OVERVIEW_TAB: &str = "overview";

/// Default secondary tab shown when `page` is mounted.
pub const fn initial_tab(page: PageType) -> &'static str {
    match page {
        PageType::Inbox => "inbox",
        PageType::EmployerInbox => "messages",
        _ => OVERVIEW_TAB,
    }
}

/// Same mapping for raw page identifiers; unknown ids fall back to `overview`.
pub fn initial_tab_for_identifier(identifier: &str) -> &'static str {
    identifier
        .parse::<PageType>()
        .map(initial_tab)
        .unwrap_or(OVERVIEW_TAB)
}

/// Picks `overview` when offered, else the first tab, else `overview`.
pub fn default_tab<'a>(tabs: &[&'a str]) -> &'a str {
    if tabs.contains(&OVERVIEW_TAB) {
        return OVERVIEW_TAB;
    }
    tabs.first().copied().unwrap_or(OVERVIEW_TAB)
}

/// Active sub-tab state for the mounted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContentProvider {
    page: PageType,
    active_tab: String,
}

impl TabContentProvider {
    pub fn new(page: PageType) -> Self {
        Self {
            page,
            active_tab: initial_tab(page).to_string(),
        }
    }

    pub fn page(&self) -> PageType {
        self.page
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = tab.into();
    }

    /// Keyed on the page: a different page resets the tab, the same page keeps
    /// whatever the user selected. Returns whether a reset happened.
    pub fn sync_page(&mut self, page: PageType) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        self.active_tab = initial_tab(page).to_string();
        true
    }
}

/// Subtree scope handed to page components. It borrows the mounted page's
/// provider, so tab changes made through the scope land in the shell. A scope
/// without a provider is an integration bug.
#[derive(Debug, Default)]
pub struct ViewScope<'a> {
    tabs: Option<&'a mut TabContentProvider>,
}

impl<'a> ViewScope<'a> {
    pub fn detached() -> Self {
        Self { tabs: None }
    }

    pub fn with_tabs(provider: &'a mut TabContentProvider) -> Self {
        Self {
            tabs: Some(provider),
        }
    }

    pub fn tab_content(&self) -> Result<&TabContentProvider, NavigationError> {
        self.tabs
            .as_deref()
            .ok_or(NavigationError::MissingTabProvider)
    }

    pub fn tab_content_mut(&mut self) -> Result<&mut TabContentProvider, NavigationError> {
        self.tabs
            .as_deref_mut()
            .ok_or(NavigationError::MissingTabProvider)
    }
}
