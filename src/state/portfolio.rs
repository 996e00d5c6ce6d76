//! Portfolio view state: loaded items, filter selections, lightbox position.
//!
//! DESIGN
//! ======
//! Every user action is a `PortfolioEvent` applied to `PortfolioState`; the
//! components only read the resulting state and re-render. `filtered` is
//! recomputed from `(items, active_tag, query)` on each change, so it is
//! always an order-preserving subset of `items`.
//!
//! The lightbox index always points into `filtered`, never `items`. Requests
//! that would leave it out of range are ignored rather than reported.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use crate::net::types::{LoadError, PortfolioItem};
use crate::util::filter::{apply_filters, derive_tags, normalize_query};
use crate::util::text::showing_summary;

/// Value of the permanent "show everything" filter control.
pub const ALL_TAG: &str = "all";

/// Active tag selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }
}

/// Progress of the single startup load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Modal detail view state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize },
}

/// Lightbox stepping direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Grid container marker exposed as `data-state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    Loading,
    Ready,
    Empty,
    Error,
}

impl GridState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }
}

/// What the status region says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Loading,
    Showing { visible: usize, total: usize },
    NoMatches,
    Unavailable,
    LoadFailed,
}

impl StatusMessage {
    pub fn text(&self) -> String {
        match self {
            Self::Loading => "Loading projects\u{2026}".to_owned(),
            Self::Showing { visible, total } => showing_summary(*visible, *total),
            Self::NoMatches => "No projects matched your filters.".to_owned(),
            Self::Unavailable => "Portfolio data is not available.".to_owned(),
            Self::LoadFailed => "Sorry, the projects could not be loaded right now. Please try again later.".to_owned(),
        }
    }
}

/// A discrete user or loader action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortfolioEvent {
    Loaded(Vec<PortfolioItem>),
    LoadFailed,
    SelectTag(TagFilter),
    /// Raw search box contents; normalized on apply.
    SetQuery(String),
    OpenLightbox(usize),
    StepLightbox(Direction),
    CloseLightbox,
}

impl PortfolioEvent {
    /// Convert the loader's outcome into an event, logging failures.
    ///
    /// This is the boundary where `LoadError` stops: it is reported here and
    /// becomes the fallback state, never an error further up.
    pub fn from_load(result: Result<Vec<PortfolioItem>, LoadError>) -> Self {
        match result {
            Ok(items) => {
                log::info!("loaded {} portfolio items", items.len());
                Self::Loaded(items)
            }
            Err(err) => {
                log::error!("portfolio load failed: {err}");
                Self::LoadFailed
            }
        }
    }
}

/// The page's single view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioState {
    /// All items in document order, set once by a successful load.
    pub items: Vec<PortfolioItem>,
    /// Items matching `active_tag` and `query`, in document order.
    pub filtered: Vec<PortfolioItem>,
    /// Distinct tags for the filter controls, sorted ascending.
    pub tags: Vec<String>,
    pub active_tag: TagFilter,
    /// Trimmed, lowercased search text; empty means no text filter.
    pub query: String,
    pub lightbox: Lightbox,
    pub load_status: LoadStatus,
}

impl PortfolioState {
    /// Apply `event` and return the resulting state.
    #[must_use]
    pub fn reduce(mut self, event: PortfolioEvent) -> Self {
        self.apply(event);
        self
    }

    /// Apply `event` in place.
    pub fn apply(&mut self, event: PortfolioEvent) {
        match event {
            PortfolioEvent::Loaded(items) => self.on_loaded(items),
            PortfolioEvent::LoadFailed => self.on_load_failed(),
            PortfolioEvent::SelectTag(tag) => self.select_tag(tag),
            PortfolioEvent::SetQuery(raw) => self.set_query(&raw),
            PortfolioEvent::OpenLightbox(index) => self.open_lightbox(index),
            PortfolioEvent::StepLightbox(direction) => self.step_lightbox(direction),
            PortfolioEvent::CloseLightbox => self.lightbox = Lightbox::Closed,
        }
    }

    fn on_loaded(&mut self, items: Vec<PortfolioItem>) {
        if self.load_status != LoadStatus::Loading {
            log::debug!("ignoring portfolio load after startup");
            return;
        }
        self.tags = derive_tags(&items);
        self.items = items;
        self.load_status = LoadStatus::Ready;
        self.refilter();
    }

    fn on_load_failed(&mut self) {
        if self.load_status != LoadStatus::Loading {
            return;
        }
        self.items.clear();
        self.filtered.clear();
        self.tags.clear();
        self.load_status = LoadStatus::Failed;
    }

    fn select_tag(&mut self, tag: TagFilter) {
        if self.active_tag == tag {
            return;
        }
        self.active_tag = tag;
        self.refilter();
    }

    fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.items, &self.active_tag, &self.query);
        if let Lightbox::Open { index } = self.lightbox {
            if index >= self.filtered.len() {
                self.lightbox = Lightbox::Closed;
            }
        }
    }

    fn open_lightbox(&mut self, index: usize) {
        if index >= self.filtered.len() {
            log::debug!("lightbox open ignored: index {index} of {}", self.filtered.len());
            return;
        }
        self.lightbox = Lightbox::Open { index };
    }

    fn step_lightbox(&mut self, direction: Direction) {
        let len = self.filtered.len();
        let Lightbox::Open { index } = self.lightbox else {
            return;
        };
        if len == 0 {
            return;
        }
        let current = index.min(len - 1);
        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => current.checked_sub(1).unwrap_or(len - 1),
        };
        self.open_lightbox(next);
    }

    pub fn is_lightbox_open(&self) -> bool {
        matches!(self.lightbox, Lightbox::Open { .. })
    }

    /// Index into `filtered` while the lightbox is open.
    pub fn current_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Open { index } => Some(index),
            Lightbox::Closed => None,
        }
    }

    /// Item shown in the lightbox, if open.
    pub fn current_item(&self) -> Option<&PortfolioItem> {
        self.current_index().and_then(|i| self.filtered.get(i))
    }

    pub fn is_tag_active(&self, tag: &TagFilter) -> bool {
        &self.active_tag == tag
    }

    /// Status region content, chosen purely from the current contents.
    pub fn status(&self) -> StatusMessage {
        match self.load_status {
            LoadStatus::Loading => StatusMessage::Loading,
            LoadStatus::Failed => StatusMessage::LoadFailed,
            LoadStatus::Ready if self.items.is_empty() => StatusMessage::Unavailable,
            LoadStatus::Ready if self.filtered.is_empty() => StatusMessage::NoMatches,
            LoadStatus::Ready => StatusMessage::Showing { visible: self.filtered.len(), total: self.items.len() },
        }
    }

    pub fn grid_state(&self) -> GridState {
        match self.status() {
            StatusMessage::Loading => GridState::Loading,
            StatusMessage::LoadFailed => GridState::Error,
            StatusMessage::Unavailable | StatusMessage::NoMatches => GridState::Empty,
            StatusMessage::Showing { .. } => GridState::Ready,
        }
    }
}
