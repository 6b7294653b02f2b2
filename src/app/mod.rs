//! Session state, clock timer and event loops

pub mod frame;
pub mod runner;
pub mod state;
pub mod timer;

pub use frame::Frame;
pub use runner::{run_headless, run_tui};
pub use state::{AppEvent, Session, Snapshot, Step};
pub use timer::ClockTimer;
