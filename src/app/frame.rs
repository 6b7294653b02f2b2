//! Serializable chart frames for headless output

use serde::Serialize;

use crate::app::state::Snapshot;
use crate::chart::format::format_population;
use crate::chart::projector::{ChartData, ChartJsData, ChartOptions};
use crate::data::store::LoadState;

/// Chart state for one snapshot, as written by the headless runner
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub year: i32,
    pub total_population: u64,
    pub total_display: String,
    pub load: LoadState,
    pub chart: ChartJsData<'a>,
    pub options: ChartOptions,
}

impl<'a> Frame<'a> {
    /// Build a frame; `chart` must be the projection of `snapshot`
    pub fn new(snapshot: &Snapshot, chart: &'a ChartData, options: ChartOptions) -> Self {
        let total_population = chart.values.iter().sum();
        Self {
            year: snapshot.year(),
            total_population,
            total_display: format_population(total_population),
            load: snapshot.load_state(),
            chart: chart.to_chart_js(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::YearClock;

    #[test]
    fn test_empty_frame_json() {
        let snapshot = Snapshot::initial(YearClock::default());
        let chart = snapshot.chart();
        let json = serde_json::to_value(Frame::new(&snapshot, &chart, ChartOptions::default())).unwrap();

        assert_eq!(json["year"], 1950);
        assert_eq!(json["total_population"], 0);
        assert_eq!(json["total_display"], "0");
        assert_eq!(json["load"], "pending");
        assert_eq!(json["chart"]["labels"], serde_json::json!([]));
        assert_eq!(json["options"]["indexAxis"], "y");
    }
}
