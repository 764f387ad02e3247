//! Generic list-view controller shared by the customer and invoice lists.
//!
//! A [`ListView`] owns the UI-facing state of one entity list: the loaded
//! items, the current page, and the search query. It composes the search
//! filter and the paginator over an [`EntityGateway`] collaborator that does
//! the actual fetching and deleting, so the same controller serves both the
//! fully client-side list (load everything once, filter and slice locally)
//! and the server-paginated list (fetch one page per navigation).
//!
//! Remote failures never surface as view state. Fetch errors are handed to
//! the injected [`ErrorReporter`] and swallowed; delete errors additionally
//! roll the items back to the snapshot taken before the optimistic removal.

use thiserror::Error;

use crate::pagination::{Paginated, get_page, page_count};
use crate::search::{SearchField, matches};

/// Failures crossing the gateway seam.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Any transport-level failure on fetch or delete.
    #[error("network failure: {0}")]
    Network(String),
    /// Malformed entity data behind the gateway.
    #[error("validation failure: {0}")]
    Validation(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Data source and mutation sink for one entity type.
pub trait EntityGateway<T> {
    /// Fetches the whole collection.
    fn find_all(&self) -> GatewayResult<Vec<T>>;
    /// Fetches one page of the collection plus the total item count.
    fn find_page(&self, page: usize, per_page: usize) -> GatewayResult<(usize, Vec<T>)>;
    /// Deletes the entity with the given id.
    fn delete(&self, id: i32) -> GatewayResult<()>;
}

/// Sink for failures the list view swallows instead of surfacing.
pub trait ErrorReporter {
    fn report(&self, error: &GatewayError, context: &str);
}

/// Default reporter writing through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &GatewayError, context: &str) {
        log::error!("{context}: {error}");
    }
}

/// Whether pagination happens against the loaded collection or per fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Load everything once, filter and slice locally.
    ClientPaginated,
    /// Fetch one page at a time; the server reports the total count.
    ServerPaginated,
}

/// Lifecycle of the view. `Loading` until the first fetch resolves, then
/// `Ready` for good; search, page and delete actions keep it `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
}

/// Per-entity wiring for a [`ListView`].
pub struct ListViewConfig<T> {
    pub per_page: usize,
    pub mode: PaginationMode,
    pub search_fields: Vec<SearchField<T>>,
    /// Extracts the entity's unique identifier.
    pub entity_id: fn(&T) -> i32,
    /// Guard deciding whether the delete action may run for an entity.
    pub can_delete: fn(&T) -> bool,
}

/// Snapshot of the list taken when a delete was issued, kept until the
/// remote call resolves so a failure can restore it.
pub struct PendingDelete<T> {
    pub id: i32,
    snapshot: Vec<T>,
    prior_total: usize,
}

pub struct ListView<T, G, R = LogReporter> {
    gateway: G,
    reporter: R,
    config: ListViewConfig<T>,
    items: Vec<T>,
    total_items: usize,
    page: usize,
    search: String,
    state: ViewState,
}

impl<T, G> ListView<T, G, LogReporter>
where
    T: Clone,
    G: EntityGateway<T>,
{
    pub fn new(gateway: G, config: ListViewConfig<T>) -> Self {
        Self::with_reporter(gateway, LogReporter, config)
    }
}

impl<T, G, R> ListView<T, G, R>
where
    T: Clone,
    G: EntityGateway<T>,
    R: ErrorReporter,
{
    pub fn with_reporter(gateway: G, reporter: R, config: ListViewConfig<T>) -> Self {
        Self {
            gateway,
            reporter,
            config,
            items: Vec::new(),
            total_items: 0,
            page: 1,
            search: String::new(),
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fetches the collection (or the current page of it) from the gateway.
    /// On failure the error is reported and the view is left in `Loading`
    /// with whatever items it already had.
    pub fn mount(&mut self) {
        self.fetch();
    }

    fn fetch(&mut self) {
        self.state = ViewState::Loading;
        let fetched = match self.config.mode {
            PaginationMode::ClientPaginated => self.gateway.find_all().map(|items| {
                let total = items.len();
                (total, items)
            }),
            PaginationMode::ServerPaginated => {
                self.gateway.find_page(self.page, self.config.per_page)
            }
        };
        match fetched {
            Ok((total, items)) => {
                self.total_items = total;
                self.items = items;
                self.state = ViewState::Ready;
            }
            Err(err) => {
                self.reporter.report(&err, "failed to load entities");
            }
        }
    }

    /// Stores the new query and snaps back to the first page. Never
    /// refetches; filtering works on the loaded collection.
    pub fn on_search_changed(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Moves to the requested page. The server-paginated mode fetches that
    /// page; the client-paginated mode only re-slices locally.
    pub fn on_page_changed(&mut self, page: usize) {
        self.page = page.max(1);
        if self.config.mode == PaginationMode::ServerPaginated {
            self.fetch();
        }
    }

    /// Optimistically removes the entity and returns the snapshot to resolve
    /// against once the remote delete finishes. Returns `None` when the id is
    /// not loaded or the delete guard rejects it (e.g. a customer that still
    /// has invoices), in which case nothing changes.
    ///
    /// Nothing serializes overlapping pending deletes: a rollback restores a
    /// snapshot that predates any delete issued after it.
    pub fn begin_delete(&mut self, id: i32) -> Option<PendingDelete<T>> {
        let entity = self
            .items
            .iter()
            .find(|item| (self.config.entity_id)(item) == id)?;
        if !(self.config.can_delete)(entity) {
            return None;
        }

        let snapshot = self.items.clone();
        let prior_total = self.total_items;
        self.items
            .retain(|item| (self.config.entity_id)(item) != id);
        self.total_items = self.total_items.saturating_sub(1);

        Some(PendingDelete {
            id,
            snapshot,
            prior_total,
        })
    }

    /// Applies the outcome of the remote delete. A failure is reported and
    /// the optimistic removal undone; the user sees the row come back.
    pub fn resolve_delete(&mut self, pending: PendingDelete<T>, result: GatewayResult<()>) {
        if let Err(err) = result {
            self.reporter
                .report(&err, &format!("failed to delete entity {}", pending.id));
            self.items = pending.snapshot;
            self.total_items = pending.prior_total;
        }
    }

    /// Runs both delete phases back to back against the gateway. Returns
    /// whether the entity is gone from the local state afterwards.
    pub fn delete(&mut self, id: i32) -> bool {
        let Some(pending) = self.begin_delete(id) else {
            return false;
        };
        let result = self.gateway.delete(id);
        let deleted = result.is_ok();
        self.resolve_delete(pending, result);
        deleted
    }

    /// Whether the delete action is enabled for the given entity.
    pub fn can_delete(&self, id: i32) -> bool {
        self.items
            .iter()
            .find(|item| (self.config.entity_id)(item) == id)
            .is_some_and(|entity| (self.config.can_delete)(entity))
    }

    /// Item count after filtering, i.e. the length the paginator sees.
    pub fn filtered_len(&self) -> usize {
        match self.config.mode {
            PaginationMode::ServerPaginated => self.total_items,
            PaginationMode::ClientPaginated => self
                .items
                .iter()
                .filter(|item| matches(*item, &self.search, &self.config.search_fields))
                .count(),
        }
    }

    /// The rows to render for the current page and search query.
    pub fn visible(&self) -> Vec<&T> {
        match self.config.mode {
            // Server mode: the loaded items already are one page.
            PaginationMode::ServerPaginated => self.items.iter().collect(),
            PaginationMode::ClientPaginated => {
                let filtered: Vec<&T> = self
                    .items
                    .iter()
                    .filter(|item| matches(*item, &self.search, &self.config.search_fields))
                    .collect();
                get_page(&filtered, self.page, self.config.per_page).to_vec()
            }
        }
    }

    /// Current page plus the page-selector links, suppressed when the data
    /// fits on a single page.
    pub fn paginated(&self) -> Paginated<&T> {
        let total_pages = page_count(self.filtered_len(), self.config.per_page);
        Paginated::new(self.visible(), self.page, total_pages)
    }
}
