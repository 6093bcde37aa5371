//! Combined state behind the classroom table

use tracing::debug;

use crate::models::Classroom;

use super::filter::filter_classrooms;
use super::pagination::{PageSize, Paginator};

/// Everything the classroom table renders from.
///
/// The loaded records are set once per process; the filtered list is
/// re-derived from scratch whenever the records or the query change,
/// never patched in place.
#[derive(Debug, Clone)]
pub struct ViewState {
    all: Vec<Classroom>,
    query: String,
    filtered: Vec<Classroom>,
    paginator: Paginator,
    loading: bool,
}

impl ViewState {
    /// Fresh state, loading until the startup fetch completes.
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            paginator: Paginator::new(PageSize::default()),
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Install the fetched records and clear the loading flag. The current
    /// (empty) query applies immediately, so only rooms with a pending
    /// lecture show up until the user types a filter.
    pub fn load_records(&mut self, records: Vec<Classroom>) {
        self.all = records;
        self.loading = false;
        self.refilter();
    }

    /// Mark the fetch as finished without data. The table stays empty.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn page_size(&self) -> PageSize {
        self.paginator.page_size()
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.paginator.set_page_size(page_size);
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn max_page(&self) -> usize {
        self.paginator.max_page()
    }

    pub fn has_next(&self) -> bool {
        self.paginator.has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.paginator.has_prev()
    }

    pub fn next_page(&mut self) {
        self.paginator.next();
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev();
    }

    /// The whole filtered list, response order preserved
    pub fn filtered(&self) -> &[Classroom] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Rows of the current page
    pub fn current_rows(&self) -> &[Classroom] {
        &self.filtered[self.paginator.window()]
    }

    fn refilter(&mut self) {
        self.filtered = filter_classrooms(&self.all, &self.query);
        self.paginator.set_len(self.filtered.len());
        debug!(
            "Filter {:?} matched {} of {} classrooms",
            self.query,
            self.filtered.len(),
            self.all.len()
        );
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
