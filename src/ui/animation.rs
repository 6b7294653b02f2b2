//! Linear bar transitions between chart states
//!
//! When the chart changes, each bar moves from the value it was showing to
//! its new value over the configured duration. Bars with no previous value
//! grow from zero.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct BarTween {
    from: HashMap<String, u64>,
    labels: Vec<String>,
    targets: Vec<u64>,
    started: Instant,
    duration: Duration,
}

impl BarTween {
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            from: HashMap::new(),
            labels: Vec::new(),
            targets: Vec::new(),
            started: now,
            duration,
        }
    }

    /// Start a transition toward `targets`, beginning from what is shown at `now`
    pub fn retarget(&mut self, labels: &[String], targets: &[u64], now: Instant) {
        let shown = self.values_at(now);
        self.from = self.labels.drain(..).zip(shown).collect();
        self.labels = labels.to_vec();
        self.targets = targets.to_vec();
        self.started = now;
    }

    /// Fraction of the transition completed, in [0, 1]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Displayed bar values at `now`, aligned with the current labels
    pub fn values_at(&self, now: Instant) -> Vec<u64> {
        let t = self.progress(now);
        self.labels
            .iter()
            .zip(&self.targets)
            .map(|(label, &target)| {
                let start = self.from.get(label).copied().unwrap_or(0);
                lerp(start, target, t)
            })
            .collect()
    }
}

fn lerp(start: u64, end: u64, t: f64) -> u64 {
    if t >= 1.0 {
        return end;
    }
    let value = start as f64 + (end as f64 - start as f64) * t;
    value.round().max(0.0) as u64
}
