//! Application state for the catalog component.
//!
//! [`App`] is the only owner of mutable state: the fetch lifecycle
//! ([`Status`]), the catalog, the search query, the derived visible set and
//! the card selection.  Rendering reads it (see [`crate::ui`]); key handling
//! mutates it (see [`crate::input`]).

use tracing::{debug, info, warn};

use crate::fetch::{self, FetchHandle, FetchOutcome};
use crate::filter;
use crate::source::{CatalogSource, Product, USER_ERROR_MESSAGE};

/// Lifecycle of the single catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The request is in flight.
    Loading,
    /// The catalog arrived; the search box and grid are live.
    Ready,
    /// The fetch failed; carries the message shown to the user.
    Error(String),
}

pub struct App {
    status: Status,
    /// Every product from the last successful fetch, in API order.
    catalog: Vec<Product>,
    /// Current search text, exactly as typed.
    query: String,
    /// `catalog` filtered by `query`.
    visible: Vec<Product>,
    /// Id of the highlighted card.
    selected: Option<u64>,
    /// Grid width in cards, as last laid out for the terminal.
    columns: usize,
    /// In-flight fetch; dropped with the app, which aborts it.
    fetch: Option<FetchHandle>,
    /// Whether the user has requested to quit.
    pub quit: bool,
}

impl App {
    /// A component in the initial `Loading` state with no fetch attached.
    pub fn new() -> Self {
        Self {
            status: Status::Loading,
            catalog: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
            selected: None,
            columns: 1,
            fetch: None,
            quit: false,
        }
    }

    /// Mount the component: start the one fetch against `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S: CatalogSource>(source: S) -> Self {
        info!(source = source.name(), "mounting catalog");
        let mut app = Self::new();
        app.fetch = Some(fetch::spawn(source));
        app
    }

    /// Apply the fetch outcome if it has arrived.  Call once per tick.
    pub fn poll_fetch(&mut self) {
        let outcome = self.fetch.as_mut().and_then(FetchHandle::try_take);
        if let Some(outcome) = outcome {
            self.apply_fetch(outcome);
        }
    }

    /// Transition out of `Loading` with a finished fetch.
    ///
    /// Only the first outcome counts; anything after a terminal state is
    /// ignored.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if self.status != Status::Loading {
            warn!(status = ?self.status, "ignoring fetch outcome after terminal state");
            return;
        }
        match outcome {
            Ok(products) => {
                self.catalog = products;
                self.status = Status::Ready;
                self.refilter();
            }
            Err(e) => {
                debug!(error = %e, "fetch failed; showing generic message");
                self.catalog.clear();
                self.visible.clear();
                self.selected = None;
                self.status = Status::Error(USER_ERROR_MESSAGE.to_string());
            }
        }
    }

    // -- accessors -----------------------------------------------------------

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    /// Position of the selected card within the visible set.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.visible.iter().position(|p| p.id == id)
    }

    // -- search --------------------------------------------------------------

    /// Replace the query and recompute the visible set.
    #[cfg(test)]
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.visible = filter::visible_products(&self.catalog, &self.query);
        debug!(query = %self.query, visible = self.visible.len(), "refiltered");

        // Keep the highlighted product if it is still on screen.
        let still_visible = self
            .selected
            .is_some_and(|id| self.visible.iter().any(|p| p.id == id));
        if !still_visible {
            self.selected = self.visible.first().map(|p| p.id);
        }
    }

    // -- layout --------------------------------------------------------------

    /// Record the terminal width so vertical moves step a whole grid row.
    pub fn resize(&mut self, width: u16) {
        self.columns = crate::ui::grid_columns(width);
    }

    // -- navigation ----------------------------------------------------------

    fn select_index(&mut self, index: usize) {
        self.selected = self.visible.get(index).map(|p| p.id);
    }

    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.selected_index() {
            Some(i) => (i + 1).min(self.visible.len() - 1),
            None => 0,
        };
        self.select_index(i);
    }

    pub fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select_index(i);
    }

    /// Move one grid row down, landing on the last card if the row below is
    /// short.
    pub fn select_below(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.selected_index() {
            Some(i) => (i + self.columns).min(self.visible.len() - 1),
            None => 0,
        };
        self.select_index(i);
    }

    pub fn select_above(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.selected_index() {
            Some(i) if i >= self.columns => i - self.columns,
            Some(i) => i,
            None => 0,
        };
        self.select_index(i);
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.select_index(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.select_index(self.visible.len() - 1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
