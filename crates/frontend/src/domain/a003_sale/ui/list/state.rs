use contracts::domain::a003_sale::{SalesFilter, SalesPage};
use contracts::shared::pagination::clamp_page;

use crate::shared::list_utils::SortState;

/// Filter, paging and sorting state of the sales records tab (pages are 1-indexed)
#[derive(Clone, Debug, PartialEq)]
pub struct SalesListState {
    pub filter: SalesFilter,
    pub page: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub sort: SortState,
}

impl Default for SalesListState {
    fn default() -> Self {
        Self {
            filter: SalesFilter::default(),
            page: 1,
            total_pages: 0,
            total_elements: 0,
            sort: SortState::default(),
        }
    }
}

impl SalesListState {
    /// Take new filter values. Any actual change starts again from page 1.
    /// Returns whether the filter changed.
    pub fn set_filter(&mut self, filter: SalesFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.page = 1;
        true
    }

    /// Jump back to the first page after a sale was created.
    /// Returns whether the displayed page moved.
    pub fn reload_first_page(&mut self) -> bool {
        let moved = self.page != 1;
        self.page = 1;
        moved
    }

    /// Request for the current filter and page
    pub fn query(&self) -> RecordsQuery {
        RecordsQuery {
            filter: self.filter.clone(),
            page: self.page,
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages);
    }

    /// Take the counters and the served page from a response
    pub fn apply_page(&mut self, resp: &SalesPage) {
        self.total_pages = resp.total_pages;
        self.total_elements = resp.total_elements;
        self.page = resp.display_page();
    }

    pub fn clear_totals(&mut self) {
        self.total_pages = 0;
        self.total_elements = 0;
    }
}

/// What a records fetch asks for: filters plus the 1-indexed page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordsQuery {
    pub filter: SalesFilter,
    pub page: usize,
}

impl RecordsQuery {
    pub fn wire_page(&self) -> usize {
        self.page.saturating_sub(1)
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to load page {}.", self.page)
    }
}

pub fn create_state() -> leptos::prelude::RwSignal<SalesListState> {
    leptos::prelude::RwSignal::new(SalesListState::default())
}
