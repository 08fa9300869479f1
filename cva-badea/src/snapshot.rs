//! Normalized tables saved to disk together with their capture time.
//!
//! Format: one comment line carrying the capture time, then a headed CSV.
//!
//! ```text
//! # fetched_at: 2021-03-16T09:12:44+01:00
//! region,metric,date,value
//! Andalucía,Confirmados PCR/TA,2021-03-15,42
//! ```

use crate::error::{BadeaError, Result};
use crate::observation::{Observation, ObservationTable};
use chrono::{DateTime, Local};
use csv::{ReaderBuilder, WriterBuilder};

const FETCHED_AT_PREFIX: &str = "# fetched_at:";

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub fetched_at: DateTime<Local>,
    pub table: ObservationTable,
}

impl Snapshot {
    pub fn new(fetched_at: DateTime<Local>, table: ObservationTable) -> Self {
        Snapshot { fetched_at, table }
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut wtr = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
        for observation in &self.table {
            wtr.serialize(observation)?;
        }
        let body = wtr
            .into_inner()
            .map_err(|e| BadeaError::Io(e.into_error()))?;
        let body = String::from_utf8(body)
            .map_err(|e| BadeaError::InvalidSnapshot(e.to_string()))?;
        Ok(format!(
            "{} {}\n{}",
            FETCHED_AT_PREFIX,
            self.fetched_at.to_rfc3339(),
            body
        ))
    }

    pub fn from_csv(data: &str) -> Result<Snapshot> {
        let first_line = data.lines().next().unwrap_or("");
        let stamp = first_line
            .strip_prefix(FETCHED_AT_PREFIX)
            .ok_or_else(|| BadeaError::InvalidSnapshot("missing fetched_at line".to_string()))?;
        let fetched_at = DateTime::parse_from_rfc3339(stamp.trim())
            .map_err(|e| BadeaError::InvalidSnapshot(format!("bad fetched_at {:?}: {}", stamp, e)))?
            .with_timezone(&Local);

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .from_reader(data.as_bytes());
        let table = rdr
            .deserialize::<Observation>()
            .collect::<std::result::Result<ObservationTable, csv::Error>>()?;

        Ok(Snapshot { fetched_at, table })
    }

    pub fn read(path: &std::path::Path) -> Result<Snapshot> {
        Snapshot::from_csv(&std::fs::read_to_string(path)?)
    }

    pub fn write(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, self.to_csv()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_snapshot_survives_a_write_and_read() {
        let fetched_at = Local.with_ymd_and_hms(2021, 3, 16, 9, 12, 44).unwrap();
        let table = ObservationTable::new(vec![
            Observation::new(
                "Andalucía",
                "Confirmados PCR/TA",
                NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
                42,
            ),
            Observation::new(
                "Córdoba",
                "Confirmados PCR/TA",
                NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
                3,
            ),
        ]);
        let snapshot = Snapshot::new(fetched_at, table);

        let csv = snapshot.to_csv().unwrap();
        assert!(csv.starts_with("# fetched_at: 2021-03-16T09:12:44"));
        assert!(csv.contains("region,metric,date,value\n"));
        assert!(csv.contains("Andalucía,Confirmados PCR/TA,2021-03-15,42\n"));

        assert_eq!(Snapshot::from_csv(&csv).unwrap(), snapshot);
    }

    #[test]
    fn test_missing_timestamp_is_rejected() {
        let result = Snapshot::from_csv("region,metric,date,value\n");
        assert!(matches!(result, Err(BadeaError::InvalidSnapshot(_))));
    }
}
