use std::time::Instant;

use chrono::NaiveTime;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::data::coverage::Coverage;
use crate::data::loader::{DataSource, PendingLoad};
use crate::data::model::{QuoteDataset, TimeKey};
use crate::rotation::QuoteRotation;
use crate::selector::Selection;

/// Shown instead of the quote when the dataset could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load the time data.";
pub const LOADING_MESSAGE: &str = "Loading literature…";
pub const NO_QUOTE_MESSAGE: &str = "No passage was found for this time.";
pub const NO_QUOTE_HINT: &str = "Please wait a moment. A new passage may appear next minute.";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the quote area should show this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuoteView<'a> {
    Loading,
    Failed,
    /// Loaded, but there is nothing to show.
    Missing,
    Showing(&'a Selection),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Time of day as of the last tick.
    pub now: NaiveTime,

    /// Loaded dataset (None until the first load succeeds).
    pub dataset: Option<QuoteDataset>,

    /// Statistics for `dataset`, computed once per load.
    pub coverage: Option<Coverage>,

    /// Quote on display and when it was drawn.
    pub rotation: QuoteRotation,

    /// Where the current (or in-flight) dataset comes from.
    pub source: DataSource,

    /// Load running in the background, if any.
    pub pending: Option<PendingLoad>,

    /// Whether a load is in progress.
    pub loading: bool,

    /// Set when the last load failed; hides the quote.
    pub load_failed: bool,

    /// Whether the coverage window is open.
    pub show_coverage: bool,

    rng: StdRng,
}

impl AppState {
    pub fn new(config: &Config, now: NaiveTime) -> Self {
        Self {
            now,
            dataset: None,
            coverage: None,
            rotation: QuoteRotation::new(config.rotation),
            source: config.data_source.clone(),
            pending: None,
            loading: false,
            load_failed: false,
            show_coverage: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Kick off a background load; the result is picked up by [`Self::tick`].
    pub fn start_load(&mut self, source: DataSource) {
        log::info!("Loading dataset from {source}");
        self.pending = Some(PendingLoad::spawn(source.clone()));
        self.source = source;
        self.loading = true;
    }

    /// Ingest a newly loaded dataset.
    pub fn set_dataset(&mut self, dataset: QuoteDataset) {
        log::info!(
            "Loaded {} quotes covering {} minutes from {}",
            dataset.quote_count(),
            dataset.len(),
            self.source
        );
        self.coverage = Some(Coverage::of(&dataset));
        self.dataset = Some(dataset);
        self.rotation.clear();
        self.loading = false;
        self.load_failed = false;
    }

    pub fn fail_load(&mut self, err: anyhow::Error) {
        log::error!("Failed to load {}: {err:#}", self.source);
        self.loading = false;
        self.load_failed = true;
    }

    /// Pick up a finished background load, if there is one.
    pub fn poll_load(&mut self) {
        let Some(result) = self.pending.as_ref().and_then(PendingLoad::poll) else {
            return;
        };
        self.pending = None;
        match result {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => self.fail_load(e),
        }
    }

    /// Advance to `now`: finish any load, then let the rotation redraw.
    pub fn tick(&mut self, now: NaiveTime, instant: Instant) {
        self.now = now;
        self.poll_load();
        if let Some(dataset) = &self.dataset {
            self.rotation
                .update(TimeKey::from_time(&now), instant, dataset, &mut self.rng);
        }
    }

    pub fn quote_view(&self) -> QuoteView<'_> {
        if self.loading {
            QuoteView::Loading
        } else if self.load_failed {
            QuoteView::Failed
        } else {
            match self.rotation.current() {
                Some(sel) => QuoteView::Showing(sel),
                None => QuoteView::Missing,
            }
        }
    }
}
