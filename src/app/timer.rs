//! Owned timer driving the year clock
//!
//! The timer runs as a tokio task that sends one [`AppEvent::Tick`] per
//! period until the clock reaches its last year, then exits on its own.
//! `stop()` (or dropping the handle) aborts the task; no tick is sent after.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::app::state::AppEvent;
use crate::core::calendar::YearClock;

pub struct ClockTimer {
    handle: Option<JoinHandle<()>>,
}

impl ClockTimer {
    /// Start ticking from `clock`; the first tick fires one `period` from now
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(clock: YearClock, period: Duration, events: mpsc::Sender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut clock = clock;
            if clock.is_finished() {
                return;
            }
            tracing::debug!(
                "Clock started at {} ({} ticks, {:?} apart)",
                clock.current_year(),
                clock.remaining_ticks(),
                period
            );

            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if !clock.advance() {
                    break;
                }
                if events.send(AppEvent::Tick).await.is_err() {
                    // Receiver gone; session is shutting down
                    break;
                }
                if clock.is_finished() {
                    tracing::info!("Clock reached {}", clock.current_year());
                    break;
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Cancel the recurring tick
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Clock stopped");
        }
    }

    /// True while the tick task is alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ClockTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let _timer = ClockTimer::start(YearClock::default(), Duration::from_millis(1000), tx);

        let started = Instant::now();
        assert!(matches!(rx.recv().await, Some(AppEvent::Tick)));
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ends_after_last_year() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = ClockTimer::start(YearClock::new(2018, 2021), Duration::from_millis(1000), tx);

        let mut ticks = 0;
        while let Some(event) = rx.recv().await {
            assert!(matches!(event, AppEvent::Tick));
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_clock_never_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        let _timer = ClockTimer::start(YearClock::new(2021, 2021), Duration::from_millis(10), tx);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timer = ClockTimer::start(YearClock::default(), Duration::from_millis(1000), tx);

        for _ in 0..3 {
            assert!(matches!(rx.recv().await, Some(AppEvent::Tick)));
        }
        timer.stop();
        assert!(!timer.is_running());

        // The aborted task drops its sender, closing the channel
        assert!(rx.recv().await.is_none());
    }
}
