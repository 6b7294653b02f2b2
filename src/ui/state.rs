//! Derived display state for the terminal UI

use std::time::Instant;

use crate::app::state::Snapshot;
use crate::chart::projector::{ChartData, ChartOptions};
use crate::ui::animation::BarTween;

/// What the terminal shows, recomputed whenever the snapshot changes
#[derive(Debug, Clone)]
pub struct ViewState {
    pub year: i32,
    pub total_population: u64,
    pub chart: ChartData,
    pub options: ChartOptions,
    pub tween: BarTween,
}

impl ViewState {
    pub fn new(snapshot: &Snapshot, options: ChartOptions, now: Instant) -> Self {
        let tween = BarTween::new(
            std::time::Duration::from_millis(options.animation.duration),
            now,
        );
        let mut state = Self {
            year: snapshot.year(),
            total_population: 0,
            chart: ChartData::default(),
            options,
            tween,
        };
        state.update(snapshot, now);
        state
    }

    /// Recompute the view and chart from the latest snapshot
    pub fn update(&mut self, snapshot: &Snapshot, now: Instant) {
        let view = snapshot.view();
        self.year = view.year;
        self.total_population = view.total_population;
        self.chart = snapshot.chart();
        self.tween.retarget(&self.chart.labels, &self.chart.values, now);
    }

    /// Bar values to draw at `now`
    pub fn bar_values(&self, now: Instant) -> Vec<u64> {
        self.tween.values_at(now)
    }
}
