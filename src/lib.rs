//! Popchart - animated per-country population bar chart

pub mod app;
pub mod chart;
pub mod core;
pub mod data;
pub mod ui;
