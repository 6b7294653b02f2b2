pub mod calendar;
pub mod config;
pub mod error;

pub use calendar::YearClock;
pub use config::ChartConfig;
