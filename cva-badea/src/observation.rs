use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation from the feed: the value of one metric for one
/// region on one diagnosis date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// `Territorio`: "Andalucía" or one of the eight provinces
    pub region: String,
    /// `Medida`: the measured quantity, e.g. "Confirmados PCR/TA"
    pub metric: String,
    /// `Fecha diagnóstico`
    pub date: NaiveDate,
    /// `Valor`
    pub value: i64,
}

impl Observation {
    pub fn new(region: &str, metric: &str, date: NaiveDate, value: i64) -> Self {
        Observation {
            region: region.to_string(),
            metric: metric.to_string(),
            date,
            value,
        }
    }
}

/// A multiset of observations.
///
/// Duplicated (region, metric, date) triples are kept as they come. Tables
/// are never mutated after construction; narrowing one produces a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        ObservationTable { rows }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest observation date, or `None` for an empty table.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|o| o.date).min()?;
        let max = self.rows.iter().map(|o| o.date).max()?;
        Some((min, max))
    }

    /// Distinct metric names in first-seen order.
    pub fn metrics(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|o| o.metric.as_str()))
    }

    /// Distinct region names in first-seen order.
    pub fn regions(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|o| o.region.as_str()))
    }

    /// A new table holding the rows that satisfy `keep`.
    pub fn filtered<F>(&self, mut keep: F) -> ObservationTable
    where
        F: FnMut(&Observation) -> bool,
    {
        self.rows.iter().filter(|o| keep(o)).cloned().collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

impl FromIterator<Observation> for ObservationTable {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        ObservationTable::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObservationTable {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for ObservationTable {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
