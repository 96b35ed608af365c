//! List pages: a shared predicate combinator and the per-page criteria built on it.

pub mod jobs;
pub mod marketplace;
pub mod pipeline;
pub mod predicate;

pub use jobs::JobSearch;
pub use marketplace::{Bookmarks, CandidateFilters, CandidateSearch, MarketplaceTab};
pub use pipeline::{stage_counts, ApplicationSearch};
pub use predicate::{leading_number, matches_all, FilterSet, Predicate};
