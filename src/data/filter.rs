//! Per-year view over the dataset

use serde::Serialize;

use crate::data::record::PopulationRecord;

/// Records for a single year plus their aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub year: i32,
    pub records: Vec<PopulationRecord>,
    pub total_population: u64,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select the records whose year equals `year`, preserving dataset order
pub fn filter_year(dataset: &[PopulationRecord], year: i32) -> FilteredView {
    let records: Vec<PopulationRecord> = dataset
        .iter()
        .filter(|r| r.year == year)
        .cloned()
        .collect();
    let total_population = records.iter().map(|r| r.population).sum();

    FilteredView {
        year,
        records,
        total_population,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PopulationRecord> {
        vec![
            PopulationRecord::new("A", 1950, 100),
            PopulationRecord::new("B", 1950, 200),
            PopulationRecord::new("A", 1951, 150),
        ]
    }

    #[test]
    fn test_filter_first_year() {
        let view = filter_year(&sample(), 1950);
        assert_eq!(
            view.records,
            vec![
                PopulationRecord::new("A", 1950, 100),
                PopulationRecord::new("B", 1950, 200),
            ]
        );
        assert_eq!(view.total_population, 300);
    }

    #[test]
    fn test_filter_second_year() {
        let view = filter_year(&sample(), 1951);
        assert_eq!(view.records, vec![PopulationRecord::new("A", 1951, 150)]);
        assert_eq!(view.total_population, 150);
    }

    #[test]
    fn test_no_match_is_empty() {
        let view = filter_year(&sample(), 1999);
        assert!(view.is_empty());
        assert_eq!(view.total_population, 0);
    }

    #[test]
    fn test_empty_dataset() {
        let view = filter_year(&[], 1950);
        assert_eq!(view.len(), 0);
        assert_eq!(view.total_population, 0);
    }
}
