//! Chart input: color assignment, projection and number formatting

pub mod colors;
pub mod format;
pub mod projector;

pub use colors::{assign_colors, ColorAssignment, ColorMap, Rgb};
pub use format::format_population;
pub use projector::{project, ChartData, ChartOptions};
