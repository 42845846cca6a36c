//! Query state for one server-side paginated listing view.
//!
//! [`TableQuery`] normalizes UI events (sort click, page click, search
//! keystrokes) into the parameter set a listing endpoint expects:
//! offset, limit, sort field and direction, search text. It performs no
//! I/O itself; fetching is the caller's job, bracketed by
//! [`begin_fetch`](TableQuery::begin_fetch) /
//! [`complete_fetch`](TableQuery::complete_fetch).

use std::time::{Duration, Instant};

use crate::debounce::Debouncer;

/// Page sizes the listing surfaces offer.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [10, 25, 50];

/// Sort direction, wire-encoded as `1` / `-1` by the listing API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
        }
    }
}

/// Frozen query parameters for one in-flight fetch, tagged with a
/// sequence number so superseded responses can be recognized and
/// discarded instead of racing last-writer-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub offset: usize,
    pub limit: usize,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub search: String,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone)]
pub struct TableQuery {
    page: usize,
    rows: usize,
    sort_field: String,
    sort_order: SortOrder,
    search: String,
    total_records: u64,
    loading: bool,
    debounce: Debouncer,
    seq: u64,
}

impl TableQuery {
    /// Fresh state: first page, smallest page size, ascending sort on
    /// `sort_field`, empty search.
    pub fn new(sort_field: impl Into<String>) -> Self {
        Self {
            page: 0,
            rows: ROWS_PER_PAGE_OPTIONS[0],
            sort_field: sort_field.into(),
            sort_order: SortOrder::Asc,
            search: String::new(),
            total_records: 0,
            loading: false,
            debounce: Debouncer::default(),
            seq: 0,
        }
    }

    /// Override the search quiet period (tests, embedders).
    #[must_use]
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.debounce = Debouncer::new(quiet_period);
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Authoritative only after the most recent fetch completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Zero-based offset of the first row on the current page.
    pub fn offset(&self) -> usize {
        self.page * self.rows
    }

    /// Apply a sort click. Changing the ordering invalidates the current
    /// offset, so the page index goes back to 0.
    pub fn on_sort(&mut self, field: impl Into<String>, order: SortOrder) {
        self.sort_field = field.into();
        self.sort_order = order;
        self.page = 0;
    }

    /// Apply a page click. Leaves every other field alone.
    pub fn on_page_change(&mut self, page: usize) {
        self.page = page;
    }

    /// Replace the page size. Values outside [`ROWS_PER_PAGE_OPTIONS`]
    /// are ignored. A new page size invalidates the current offset the
    /// same way a sort change does, so the page index resets too.
    pub fn set_rows(&mut self, rows: usize) -> bool {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            tracing::debug!(rows, "ignoring page size outside the allowed set");
            return false;
        }
        self.rows = rows;
        self.page = 0;
        true
    }

    /// Record a search-text change and (re)arm the debounce. The page
    /// index is NOT reset here; that happens once, when the pending
    /// search becomes due, so intermediate keystrokes don't thrash it.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search {
            return;
        }
        self.search = text;
        self.debounce.mark_change();
    }

    /// As [`set_search`](Self::set_search) with an explicit clock reading.
    pub fn set_search_at(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.search {
            return;
        }
        self.search = text;
        self.debounce.mark_change_at(now);
    }

    /// Whether a search change is waiting out its quiet period.
    pub fn search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Consume the pending search once its quiet period has elapsed.
    /// Returns `true` when the caller should refetch; the page index is
    /// reset to 0 at that moment so the refetch can't land on a stale
    /// offset past the filtered result set.
    pub fn take_due_search(&mut self) -> bool {
        self.take_due_search_at(Instant::now())
    }

    pub fn take_due_search_at(&mut self, now: Instant) -> bool {
        if self.debounce.try_fire_at(now) {
            self.page = 0;
            true
        } else {
            false
        }
    }

    /// Issue a ticket for a fetch of the current page and mark the view
    /// loading. Each ticket supersedes every earlier one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.loading = true;
        tracing::debug!(
            seq = self.seq,
            offset = self.offset(),
            limit = self.rows,
            sort = %self.sort_field,
            "begin fetch"
        );
        FetchTicket {
            seq: self.seq,
            offset: self.offset(),
            limit: self.rows,
            sort_field: self.sort_field.clone(),
            sort_order: self.sort_order,
            search: self.search.clone(),
        }
    }

    /// Apply a completed fetch. The total is only accepted when the
    /// ticket is still the latest issued; a superseded response is
    /// discarded and `false` is returned so the caller can drop its rows
    /// as well.
    pub fn complete_fetch(&mut self, ticket: &FetchTicket, total_records: u64) -> bool {
        if ticket.seq != self.seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.seq,
                "discarding superseded fetch response"
            );
            return false;
        }
        self.total_records = total_records;
        self.loading = false;
        true
    }

    /// Acknowledge a failed fetch: clears the loading flag when the
    /// ticket is still current, leaves the last known total untouched.
    pub fn fail_fetch(&mut self, ticket: &FetchTicket) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_change_resets_page() {
        let mut query = TableQuery::new("nom");
        query.on_page_change(7);
        query.on_sort("montant", SortOrder::Desc);
        assert_eq!(query.page(), 0);
        assert_eq!(query.sort_field(), "montant");
        assert_eq!(query.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut query = TableQuery::new("nom");
        query.on_page_change(3);
        assert!(query.set_rows(25));
        assert_eq!(query.page(), 0);
        assert_eq!(query.rows(), 25);
    }

    #[test]
    fn page_change_alone_resets_nothing() {
        let mut query = TableQuery::new("nom");
        query.on_sort("montant", SortOrder::Desc);
        query.on_page_change(4);
        assert_eq!(query.page(), 4);
        assert_eq!(query.sort_field(), "montant");
        assert_eq!(query.offset(), 4 * query.rows());
    }

    #[test]
    fn disallowed_page_size_is_ignored() {
        let mut query = TableQuery::new("nom");
        query.on_page_change(2);
        assert!(!query.set_rows(37));
        assert_eq!(query.rows(), ROWS_PER_PAGE_OPTIONS[0]);
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn rapid_search_changes_collapse_into_one_refetch() {
        let start = Instant::now();
        let mut query =
            TableQuery::new("nom").with_quiet_period(Duration::from_millis(300));
        query.on_page_change(5);

        query.set_search_at("é", start);
        query.set_search_at("éco", start + Duration::from_millis(100));
        query.set_search_at("école", start + Duration::from_millis(200));

        // Quiet period counts from the last keystroke; page untouched so far.
        assert!(!query.take_due_search_at(start + Duration::from_millis(450)));
        assert_eq!(query.page(), 5);

        assert!(query.take_due_search_at(start + Duration::from_millis(500)));
        assert_eq!(query.search(), "école");
        assert_eq!(query.page(), 0);

        // One refetch per burst.
        assert!(!query.take_due_search_at(start + Duration::from_millis(600)));
    }

    #[test]
    fn unchanged_search_text_does_not_rearm() {
        let start = Instant::now();
        let mut query =
            TableQuery::new("nom").with_quiet_period(Duration::from_millis(300));
        query.set_search_at("mairie", start);
        query.set_search_at("mairie", start + Duration::from_millis(250));
        assert!(query.take_due_search_at(start + Duration::from_millis(300)));
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut query = TableQuery::new("nom");
        let stale = query.begin_fetch();
        query.on_page_change(2);
        let latest = query.begin_fetch();

        assert!(!query.complete_fetch(&stale, 10));
        assert!(query.is_loading());
        assert_eq!(query.total_records(), 0);

        assert!(query.complete_fetch(&latest, 42));
        assert!(!query.is_loading());
        assert_eq!(query.total_records(), 42);
    }

    #[test]
    fn failed_fetch_clears_loading_only_when_current() {
        let mut query = TableQuery::new("nom");
        let stale = query.begin_fetch();
        let _latest = query.begin_fetch();
        assert!(!query.fail_fetch(&stale));
        assert!(query.is_loading());

        let latest = query.begin_fetch();
        assert!(query.fail_fetch(&latest));
        assert!(!query.is_loading());
    }

    #[test]
    fn ticket_freezes_query_parameters() {
        let mut query = TableQuery::new("montant");
        query.on_sort("nom", SortOrder::Desc);
        query.on_page_change(2);
        let ticket = query.begin_fetch();
        assert_eq!(ticket.offset, 2 * ROWS_PER_PAGE_OPTIONS[0]);
        assert_eq!(ticket.limit, ROWS_PER_PAGE_OPTIONS[0]);
        assert_eq!(ticket.sort_field, "nom");
        assert_eq!(ticket.sort_order, SortOrder::Desc);
    }
}
