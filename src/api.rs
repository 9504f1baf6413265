use crate::config::Config;
use crate::error::{CdResult, ComboError};
use crate::rankings::detail::{self, RankLookup};
use crate::rankings::engine::{self, QueryPage, SortKey, DEFAULT_ITEMS_PER_PAGE};
use crate::rankings::filter::FilterCriteria;
use crate::rankings::loader::{self, DatasetState};
use crate::rankings::pages::{self, PageLabel};
use crate::rankings::types::Dataset;
use std::cell::Cell;
use std::path::Path;
use tracing::{debug, info};

/// Everything a browsing front-end holds between interactions: the loaded
/// dataset plus the current filters, sort and page. The query engine itself
/// stays pure; this value is what gets passed into it.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    state: DatasetState,
    filters: FilterCriteria,
    sort: SortKey,
    page: usize,
    items_per_page: usize,
    // Filtered count for the current data + filters; sort and page size don't affect it
    matched: Cell<Option<usize>>,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self {
            state: DatasetState::Loading,
            filters: FilterCriteria::default(),
            sort: SortKey::Rank,
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            matched: Cell::new(None),
        }
    }
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> CdResult<Self> {
        config.validate()?;
        Ok(Self {
            sort: config.query.sort,
            items_per_page: config.query.per_page,
            ..Self::default()
        })
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut session = Self::default();
        session.finish_loading(Ok(dataset));
        session
    }

    /// Reads the payload once. A failure leaves the session `Unavailable`.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> &DatasetState {
        self.state = loader::load_state(path);
        self.matched.set(None);
        if let Some(ds) = self.state.dataset() {
            info!("✅ Loaded {} combinations", ds.len());
        }
        &self.state
    }

    pub fn finish_loading(&mut self, result: CdResult<Dataset>) {
        self.state = match result {
            Ok(ds) => DatasetState::Loaded(ds),
            Err(e) => DatasetState::Unavailable(e.to_string()),
        };
        self.matched.set(None);
        self.page = 1;
    }

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.state.dataset()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_items_per_page(&mut self, n: usize) -> CdResult<()> {
        if n == 0 {
            return Err(ComboError::Config("items per page must be at least 1".to_string()));
        }
        self.items_per_page = n;
        self.page = 1;
        Ok(())
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
        self.matched.set(None);
        self.page = 1;
    }

    /// Edits one or more criteria in place; always returns to page 1.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        edit(&mut self.filters);
        self.matched.set(None);
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.set_filters(FilterCriteria::default());
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Any page is accepted; out-of-range pages simply query empty.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Number of combinations passing the current filters. Computed once
    /// per filter or dataset change.
    pub fn total_matched(&self) -> usize {
        if let Some(n) = self.matched.get() {
            return n;
        }
        let n = self
            .state
            .dataset()
            .map_or(0, |ds| engine::filter(&ds.rankings, &self.filters).len());
        self.matched.set(Some(n));
        n
    }

    pub fn total_pages(&self) -> usize {
        engine::total_pages(self.total_matched(), self.items_per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns false (and stays put) at the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns false (and stays put) at page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Current page of results. Empty until the dataset has loaded.
    pub fn query(&self) -> QueryPage<'_> {
        match self.state.dataset() {
            Some(ds) => {
                let page = engine::run_query(
                    &ds.rankings,
                    &self.filters,
                    self.sort,
                    self.page,
                    self.items_per_page,
                );
                self.matched.set(Some(page.total_matched));
                page
            }
            None => {
                debug!("Query skipped: dataset not loaded");
                QueryPage::empty(self.page, self.items_per_page)
            }
        }
    }

    pub fn page_labels(&self) -> Vec<PageLabel> {
        pages::page_labels(self.page, self.total_pages())
    }

    pub fn lookup(&self, rank: u32) -> RankLookup<'_> {
        match self.state.dataset() {
            Some(ds) => detail::lookup(ds, rank),
            None => RankLookup::Unavailable,
        }
    }
}
