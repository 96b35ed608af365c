//! Page identifiers, router dispatch and the secondary tab context.

pub mod page;
pub mod router;
pub mod shell;
pub mod tabs;


pub use page::{PageType, Perspective};
pub use router::{PageRouter, PageView};
pub use shell::AppShell;
pub use tabs::{
    default_tab, initial_tab, initial_tab_for_identifier, TabContentProvider, ViewScope,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown page identifier '{0}'")]
    UnknownPage(String),
    #[error("tab content accessed outside of a tab content provider")]
    MissingTabProvider,
}
