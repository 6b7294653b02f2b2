//! Projection of a year's view into declarative chart input
//!
//! The output is plain data: index-aligned label/value/color sequences plus
//! the chart options. Renderers consume it; nothing here draws.

use serde::Serialize;

use crate::chart::colors::{ColorAssignment, ColorMap, Rgb};
use crate::data::filter::FilteredView;

/// Dataset label shown by the chart legend
pub const DATASET_LABEL: &str = "Population";

/// Bar outline width
pub const BORDER_WIDTH: u32 = 1;

/// Index-aligned bar chart input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub background_colors: Vec<String>,
    pub border_colors: Vec<String>,
    /// Raw channels behind each color pair, for renderers without CSS
    pub rgbs: Vec<Rgb>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Chart.js `data` object
    pub fn to_chart_js(&self) -> ChartJsData<'_> {
        ChartJsData {
            labels: &self.labels,
            datasets: vec![ChartJsDataset {
                label: DATASET_LABEL,
                data: &self.values,
                background_color: &self.background_colors,
                border_color: &self.border_colors,
                border_width: BORDER_WIDTH,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChartJsData<'a> {
    pub labels: &'a [String],
    pub datasets: Vec<ChartJsDataset<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset<'a> {
    pub label: &'static str,
    pub data: &'a [u64],
    pub background_color: &'a [String],
    pub border_color: &'a [String],
    pub border_width: u32,
}

/// Axis along which categories are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    /// Vertical bars
    X,
    /// Horizontal bars
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationOptions {
    /// Transition length in milliseconds
    pub duration: u64,
}

/// Rendering options handed over with the chart data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: IndexAxis,
    pub scales: ScaleOptions,
    pub animation: AnimationOptions,
}

impl ChartOptions {
    pub fn with_animation_ms(duration: u64) -> Self {
        Self {
            animation: AnimationOptions { duration },
            ..Self::default()
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.index_axis == IndexAxis::Y
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            index_axis: IndexAxis::Y,
            scales: ScaleOptions {
                x: AxisOptions { begin_at_zero: true },
                y: AxisOptions { begin_at_zero: true },
            },
            animation: AnimationOptions { duration: 1000 },
        }
    }
}

/// Map a filtered view onto chart input using the session color map
///
/// Countries without a color entry get the fallback pair; this never fails.
pub fn project(view: &FilteredView, colors: &ColorMap) -> ChartData {
    let fallback = ColorAssignment::fallback();
    let mut chart = ChartData {
        labels: Vec::with_capacity(view.len()),
        values: Vec::with_capacity(view.len()),
        background_colors: Vec::with_capacity(view.len()),
        border_colors: Vec::with_capacity(view.len()),
        rgbs: Vec::with_capacity(view.len()),
    };

    for record in &view.records {
        let color = colors.get(&record.country_name).unwrap_or(&fallback);
        chart.labels.push(record.country_name.clone());
        chart.values.push(record.population);
        chart.background_colors.push(color.background_color.clone());
        chart.border_colors.push(color.border_color.clone());
        chart.rgbs.push(color.rgb);
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_year;
    use crate::data::record::PopulationRecord;

    fn colors() -> ColorMap {
        let mut map = ColorMap::new();
        map.insert("A".into(), ColorAssignment::from_rgb(Rgb::new(10, 20, 30)));
        map.insert("B".into(), ColorAssignment::from_rgb(Rgb::new(40, 50, 60)));
        map
    }

    #[test]
    fn test_projection_is_index_aligned() {
        let dataset = vec![
            PopulationRecord::new("A", 1950, 100),
            PopulationRecord::new("B", 1950, 200),
        ];
        let chart = project(&filter_year(&dataset, 1950), &colors());

        assert_eq!(chart.labels, vec!["A", "B"]);
        assert_eq!(chart.values, vec![100, 200]);
        assert_eq!(chart.background_colors, vec!["rgba(10, 20, 30, 0.2)", "rgba(40, 50, 60, 0.2)"]);
        assert_eq!(chart.border_colors, vec!["rgb(10, 20, 30)", "rgb(40, 50, 60)"]);
        assert_eq!(chart.rgbs, vec![Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]);
    }

    #[test]
    fn test_missing_color_falls_back() {
        let dataset = vec![PopulationRecord::new("Unknown", 1950, 5)];
        let chart = project(&filter_year(&dataset, 1950), &colors());
        assert_eq!(chart.background_colors, vec!["rgba(75, 192, 192, 0.2)"]);
        assert_eq!(chart.border_colors, vec!["rgb(75, 192, 192)"]);
    }

    #[test]
    fn test_empty_view_empty_chart() {
        let chart = project(&FilteredView::default(), &colors());
        assert!(chart.is_empty());
        assert!(chart.values.is_empty());
        assert!(chart.border_colors.is_empty());
    }

    #[test]
    fn test_chart_js_shape() {
        let dataset = vec![PopulationRecord::new("A", 1950, 100)];
        let chart = project(&filter_year(&dataset, 1950), &colors());
        let json = serde_json::to_value(chart.to_chart_js()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "labels": ["A"],
                "datasets": [{
                    "label": "Population",
                    "data": [100],
                    "backgroundColor": ["rgba(10, 20, 30, 0.2)"],
                    "borderColor": ["rgb(10, 20, 30)"],
                    "borderWidth": 1,
                }],
            })
        );
    }

    #[test]
    fn test_default_options_horizontal_zero_based() {
        let options = ChartOptions::default();
        assert!(options.is_horizontal());
        let json = serde_json::to_value(options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "indexAxis": "y",
                "scales": {
                    "x": { "beginAtZero": true },
                    "y": { "beginAtZero": true },
                },
                "animation": { "duration": 1000 },
            })
        );
    }
}
