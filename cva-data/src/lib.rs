//! Filtering and region views over normalized observations.
//!
//! Every function here is pure: it reads an [`ObservationTable`] and returns
//! a new one, so the same inputs always give the same output.

use cva_badea::observation::ObservationTable;

/// Narrowing by start date and metric.
pub mod filter {
    use super::ObservationTable;
    use chrono::NaiveDate;

    /// Rows dated on or after `date_from` whose metric is exactly `metric`.
    ///
    /// An empty result is not an error; it renders as an empty chart.
    pub fn filter(table: &ObservationTable, date_from: NaiveDate, metric: &str) -> ObservationTable {
        let filtered = table.filtered(|o| o.date >= date_from && o.metric == metric);
        log::debug!(
            "filter from {} on {:?}: {} of {} rows",
            date_from,
            metric,
            filtered.len(),
            table.len()
        );
        filtered
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use cva_badea::observation::Observation;

        fn date(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        fn single_row() -> ObservationTable {
            ObservationTable::new(vec![Observation::new(
                "Andalucía",
                "Casos",
                date(2021, 3, 15),
                42,
            )])
        }

        #[test]
        fn test_date_from_is_inclusive() {
            let table = single_row();
            assert!(filter(&table, date(2021, 3, 16), "Casos").is_empty());
            assert_eq!(filter(&table, date(2021, 3, 15), "Casos"), table);
        }

        #[test]
        fn test_metric_must_match_exactly() {
            let table = single_row();
            assert!(filter(&table, date(2021, 1, 1), "casos").is_empty());
            assert!(filter(&table, date(2021, 1, 1), "Casos ").is_empty());
        }

        #[test]
        fn test_filter_is_repeatable() {
            let table = ObservationTable::new(vec![
                Observation::new("Sevilla", "Casos", date(2021, 3, 14), 1),
                Observation::new("Sevilla", "Casos", date(2021, 3, 15), 2),
                Observation::new("Sevilla", "Altas", date(2021, 3, 15), 3),
                Observation::new("Sevilla", "Casos", date(2021, 3, 15), 2),
            ]);
            let first = filter(&table, date(2021, 3, 15), "Casos");
            let second = filter(&table, date(2021, 3, 15), "Casos");
            assert_eq!(first, second);
            assert_eq!(first.len(), 2);
        }
    }
}

/// Projections of a table onto the whole territory or its provinces.
pub mod views {
    use super::ObservationTable;
    use cva_badea::region::is_aggregate;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ViewError {
        /// The requested province has no rows in the table
        #[error("Province not present in data: {0}")]
        UnknownProvince(String),
    }

    /// Rows for the aggregate region ("Andalucía").
    pub fn whole_territory(table: &ObservationTable) -> ObservationTable {
        table.filtered(|o| is_aggregate(&o.region))
    }

    /// Rows for every region other than the aggregate.
    pub fn all_provinces(table: &ObservationTable) -> ObservationTable {
        table.filtered(|o| !is_aggregate(&o.region))
    }

    /// Distinct province names present in the table, first-seen order.
    pub fn province_names(table: &ObservationTable) -> Vec<String> {
        all_provinces(table).regions()
    }

    /// Rows for one province. `name` must be one of [`province_names`].
    pub fn single_province(
        table: &ObservationTable,
        name: &str,
    ) -> Result<ObservationTable, ViewError> {
        if is_aggregate(name) || !table.iter().any(|o| o.region == name) {
            return Err(ViewError::UnknownProvince(name.to_string()));
        }
        Ok(table.filtered(|o| o.region == name))
    }

}
