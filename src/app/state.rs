//! Session state as immutable snapshots
//!
//! Every external event (dataset loaded, clock tick) produces a new
//! [`Snapshot`]; the per-year view and chart input are pure functions of the
//! latest one. [`Session`] owns the current snapshot and the color RNG.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::chart::colors::{assign_colors, ColorMap};
use crate::chart::projector::{project, ChartData, ChartOptions};
use crate::core::calendar::YearClock;
use crate::core::config::ChartConfig;
use crate::data::filter::{filter_year, FilteredView};
use crate::data::record::PopulationRecord;
use crate::data::store::{DatasetStore, LoadState};

/// External events driving the session
#[derive(Debug)]
pub enum AppEvent {
    /// The one-shot fetch finished (successfully or not)
    DatasetLoaded(DatasetStore),
    /// The year clock advanced
    Tick,
    /// User asked to leave
    Quit,
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Changed,
    Unchanged,
    Quit,
}

/// Immutable session state
#[derive(Debug, Clone)]
pub struct Snapshot {
    dataset: Arc<[PopulationRecord]>,
    colors: Arc<ColorMap>,
    clock: YearClock,
    load: LoadState,
}

impl Snapshot {
    /// State at mount: no data, clock at its first year
    pub fn initial(clock: YearClock) -> Self {
        Self {
            dataset: Arc::from(Vec::new()),
            colors: Arc::new(ColorMap::new()),
            clock,
            load: LoadState::Pending,
        }
    }

    /// New snapshot carrying the loaded dataset and its colors
    pub fn with_dataset(&self, store: &DatasetStore, colors: ColorMap) -> Self {
        Self {
            dataset: store.shared(),
            colors: Arc::new(colors),
            clock: self.clock,
            load: store.state(),
        }
    }

    /// New snapshot one year later (or identical once the clock is finished)
    pub fn ticked(&self) -> Self {
        let mut clock = self.clock;
        clock.advance();
        Self {
            clock,
            ..self.clone()
        }
    }

    pub fn year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn clock(&self) -> YearClock {
        self.clock
    }

    pub fn dataset(&self) -> &[PopulationRecord] {
        &self.dataset
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Records for the current year and their total
    pub fn view(&self) -> FilteredView {
        filter_year(&self.dataset, self.year())
    }

    /// Chart input for the current year
    pub fn chart(&self) -> ChartData {
        project(&self.view(), &self.colors)
    }

    /// Nothing left to happen: data settled and clock frozen
    pub fn is_settled(&self) -> bool {
        self.load != LoadState::Pending && self.clock.is_finished()
    }
}

/// Owner of the current snapshot
pub struct Session<R: Rng = ChaCha8Rng> {
    snapshot: Snapshot,
    rng: R,
    options: ChartOptions,
}

impl Session<ChaCha8Rng> {
    /// Session for `config`, seeding colors from its seed or OS entropy
    pub fn from_config(config: &ChartConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(
            YearClock::new(config.start_year, config.end_year),
            ChartOptions::with_animation_ms(config.animation_ms),
            rng,
        )
    }
}

impl<R: Rng> Session<R> {
    pub fn new(clock: YearClock, options: ChartOptions, rng: R) -> Self {
        Self {
            snapshot: Snapshot::initial(clock),
            rng,
            options,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn options(&self) -> ChartOptions {
        self.options
    }

    /// Apply one event, replacing the current snapshot
    pub fn apply(&mut self, event: AppEvent) -> Step {
        match event {
            AppEvent::DatasetLoaded(store) => {
                if self.snapshot.load != LoadState::Pending {
                    tracing::warn!("Ignoring repeated dataset load");
                    return Step::Unchanged;
                }
                let colors = assign_colors(store.records(), &mut self.rng);
                tracing::debug!("Assigned colors to {} countries", colors.len());
                self.snapshot = self.snapshot.with_dataset(&store, colors);
                Step::Changed
            }
            AppEvent::Tick => {
                if self.snapshot.clock.is_finished() {
                    return Step::Unchanged;
                }
                self.snapshot = self.snapshot.ticked();
                tracing::trace!("Year {}", self.snapshot.year());
                Step::Changed
            }
            AppEvent::Quit => Step::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PopError;

    fn session() -> Session {
        Session::new(
            YearClock::default(),
            ChartOptions::default(),
            ChaCha8Rng::seed_from_u64(42),
        )
    }

    fn sample_store() -> DatasetStore {
        DatasetStore::from_fetch(Ok(vec![
            PopulationRecord::new("A", 1950, 100),
            PopulationRecord::new("B", 1950, 200),
            PopulationRecord::new("A", 1951, 150),
        ]))
    }

    #[test]
    fn test_initial_snapshot() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.year(), 1950);
        assert_eq!(snapshot.load_state(), LoadState::Pending);
        assert!(snapshot.view().is_empty());
        assert!(snapshot.chart().is_empty());
    }

    #[test]
    fn test_dataset_then_ticks() {
        let mut session = session();
        assert_eq!(session.apply(AppEvent::DatasetLoaded(sample_store())), Step::Changed);
        assert_eq!(session.snapshot().colors().len(), 2);
        assert_eq!(session.snapshot().view().total_population, 300);

        assert_eq!(session.apply(AppEvent::Tick), Step::Changed);
        let view = session.snapshot().view();
        assert_eq!(view.year, 1951);
        assert_eq!(view.total_population, 150);
    }

    #[test]
    fn test_previous_snapshot_is_untouched() {
        let mut session = session();
        session.apply(AppEvent::DatasetLoaded(sample_store()));
        let before = session.snapshot().clone();
        session.apply(AppEvent::Tick);
        assert_eq!(before.year(), 1950);
        assert_eq!(session.snapshot().year(), 1951);
    }

    #[test]
    fn test_colors_stable_across_years() {
        let mut session = session();
        session.apply(AppEvent::DatasetLoaded(sample_store()));
        let first = session.snapshot().chart();
        session.apply(AppEvent::Tick);
        let second = session.snapshot().chart();
        assert_eq!(first.labels[0], "A");
        assert_eq!(second.labels[0], "A");
        assert_eq!(first.background_colors[0], second.background_colors[0]);
    }

    #[test]
    fn test_second_load_ignored() {
        let mut session = session();
        session.apply(AppEvent::DatasetLoaded(sample_store()));
        let colors = session.snapshot().colors().clone();
        assert_eq!(
            session.apply(AppEvent::DatasetLoaded(DatasetStore::from_fetch(Ok(vec![])))),
            Step::Unchanged
        );
        assert_eq!(session.snapshot().colors(), &colors);
        assert_eq!(session.snapshot().dataset().len(), 3);
    }

    #[test]
    fn test_failed_load_renders_empty() {
        let mut session = session();
        let store = DatasetStore::from_fetch(Err(PopError::Fetch("down".into())));
        assert_eq!(session.apply(AppEvent::DatasetLoaded(store)), Step::Changed);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.load_state(), LoadState::Failed);
        assert_eq!(snapshot.view().total_population, 0);
        assert!(snapshot.chart().is_empty());
    }

    #[test]
    fn test_tick_after_end_is_unchanged() {
        let mut session = Session::new(
            YearClock::new(2020, 2021),
            ChartOptions::default(),
            ChaCha8Rng::seed_from_u64(0),
        );
        assert_eq!(session.apply(AppEvent::Tick), Step::Changed);
        assert_eq!(session.apply(AppEvent::Tick), Step::Unchanged);
        assert_eq!(session.snapshot().year(), 2021);
    }

    #[test]
    fn test_settled_needs_load_and_finished_clock() {
        let mut session = Session::new(
            YearClock::new(2021, 2021),
            ChartOptions::default(),
            ChaCha8Rng::seed_from_u64(0),
        );
        assert!(!session.snapshot().is_settled());
        session.apply(AppEvent::DatasetLoaded(sample_store()));
        assert!(session.snapshot().is_settled());
    }

    #[test]
    fn test_quit() {
        assert_eq!(session().apply(AppEvent::Quit), Step::Quit);
    }

    #[test]
    fn test_from_config_uses_bounds_and_seed() {
        let config = ChartConfig {
            start_year: 2000,
            end_year: 2005,
            seed: Some(11),
            animation_ms: 250,
            ..ChartConfig::default()
        };
        let mut a = Session::from_config(&config);
        let mut b = Session::from_config(&config);
        assert_eq!(a.snapshot().year(), 2000);
        assert_eq!(a.options().animation.duration, 250);

        a.apply(AppEvent::DatasetLoaded(sample_store()));
        b.apply(AppEvent::DatasetLoaded(sample_store()));
        assert_eq!(a.snapshot().colors(), b.snapshot().colors());
    }
}
