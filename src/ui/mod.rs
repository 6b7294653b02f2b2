//! UI module - ratatui terminal front end for the chart

pub mod animation;
pub mod display;
pub mod input;
pub mod state;
pub mod terminal;

pub use animation::BarTween;
pub use state::ViewState;
