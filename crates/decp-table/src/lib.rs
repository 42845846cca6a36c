//! Table-state controller for API-backed listing views.
//!
//! Owns pagination, sorting and debounced-search state for a view whose
//! rows come from a remote listing endpoint, and sequences fetches so
//! stale responses can be told apart from current ones. No I/O happens
//! here; the fetch itself is an injected collaborator.

pub mod debounce;
pub mod query;

pub use debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
pub use query::{FetchTicket, ROWS_PER_PAGE_OPTIONS, SortOrder, TableQuery};
