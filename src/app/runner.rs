//! Event loops tying the fetch, the clock and the session together
//!
//! Both loops follow the same shape: spawn the one-shot fetch, start the
//! clock timer, then apply events one at a time until the user quits or
//! (headless only) nothing is left to happen. On exit the timer is stopped
//! and an unfinished fetch is aborted, so nothing lands after teardown.

use std::future::Future;
use std::io::Write;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::app::frame::Frame;
use crate::app::state::{AppEvent, Session, Snapshot, Step};
use crate::app::timer::ClockTimer;
use crate::core::config::ChartConfig;
use crate::core::error::Result;
use crate::data::client::DatasetSource;
use crate::data::store::DatasetStore;
use crate::ui;
use crate::ui::state::ViewState;

/// Event channel capacity
const EVENT_BUFFER: usize = 64;

/// Redraw cadence for the terminal UI (~30 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Run the one-shot fetch in its own task and report the outcome as an event
fn spawn_fetch<S>(source: S, events: mpsc::Sender<AppEvent>) -> JoinHandle<()>
where
    S: DatasetSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let store = DatasetStore::load(&source).await;
        if events.send(AppEvent::DatasetLoaded(store)).await.is_err() {
            tracing::debug!("Dataset arrived after shutdown; dropped");
        }
    })
}

fn write_frame<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let chart = session.snapshot().chart();
    let frame = Frame::new(session.snapshot(), &chart, session.options());
    serde_json::to_writer(&mut *out, &frame)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Print one JSON frame per state change until the run settles
///
/// Returns the final snapshot. `shutdown` ends the run early.
pub async fn run_headless<S, W, F>(
    config: &ChartConfig,
    source: S,
    out: &mut W,
    shutdown: F,
) -> Result<Snapshot>
where
    S: DatasetSource + Send + Sync + 'static,
    W: Write,
    F: Future<Output = ()>,
{
    let mut session = Session::from_config(config);
    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);

    write_frame(out, &session)?;

    let fetch = spawn_fetch(source, tx.clone());
    let mut timer = ClockTimer::start(session.snapshot().clock(), config.tick_interval(), tx);

    tokio::pin!(shutdown);
    while !session.snapshot().is_settled() {
        let event = tokio::select! {
            event = rx.recv() => event,
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
        };
        let Some(event) = event else { break };

        match session.apply(event) {
            Step::Changed => write_frame(out, &session)?,
            Step::Unchanged => {}
            Step::Quit => break,
        }
    }

    timer.stop();
    fetch.abort();
    tracing::info!("Finished at year {}", session.snapshot().year());
    Ok(session.snapshot().clone())
}

/// Draw the chart in the terminal until the user quits
pub async fn run_tui<S>(config: &ChartConfig, source: S) -> Result<()>
where
    S: DatasetSource + Send + Sync + 'static,
{
    let mut session = Session::from_config(config);
    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);

    let mut terminal = ui::terminal::init()?;
    let input = ui::input::spawn(tx.clone());
    let fetch = spawn_fetch(source, tx.clone());
    let mut timer = ClockTimer::start(session.snapshot().clock(), config.tick_interval(), tx);

    let mut view = ViewState::new(session.snapshot(), session.options(), Instant::now());
    let mut frames = interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break Ok(()) };
                match session.apply(event) {
                    Step::Changed => view.update(session.snapshot(), Instant::now()),
                    Step::Unchanged => {}
                    Step::Quit => break Ok(()),
                }
            }
            _ = frames.tick() => {}
        }

        let now = Instant::now();
        if let Err(e) = terminal.draw(|f| ui::display::draw(f, &view, now)) {
            break Err(e.into());
        }
    };

    timer.stop();
    fetch.abort();
    drop(rx);
    ui::terminal::restore()?;
    if input.join().is_err() {
        tracing::warn!("Input thread panicked");
    }
    tracing::info!("Closed at year {}", session.snapshot().year());
    result
}
