//! Raw feed text and its normalization into an [`ObservationTable`].
//!
//! The BADEA export is a CSV file with a single column: the header and every
//! row hold `;`-joined fields inside that one column, e.g.
//!
//! ```text
//! Territorio;Medida;Fecha diagnóstico;Valor;
//! Andalucía;Confirmados PCR/TA;15/03/2021;42;
//! ```
//!
//! Columns are located by header name. Anything the header declares besides
//! the four required names (the live feed ends with an unnamed column) is
//! dropped. Rows that cannot be read, or name a region outside Andalucía and
//! its eight provinces, are skipped and counted in a [`SkipReport`]; only an
//! unusable header (or a CSV layer the reader cannot decode at all) fails the
//! whole parse.

use crate::error::{BadeaError, Result, RowError};
use crate::observation::{Observation, ObservationTable};
use crate::region::is_known_region;
use chrono::{DateTime, Local};
use csv::{ReaderBuilder, StringRecord};
use cva_utils::dates::parse_date_dmy;
use log::{info, warn};

/// Separator between the fields packed into the feed's single CSV column.
pub const FIELD_DELIMITER: char = ';';

pub const REGION_COLUMN: &str = "Territorio";
pub const METRIC_COLUMN: &str = "Medida";
pub const DATE_COLUMN: &str = "Fecha diagnóstico";
pub const VALUE_COLUMN: &str = "Valor";

/// The feed text as downloaded, stamped with the time it was captured.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeed {
    text: String,
    fetched_at: DateTime<Local>,
}

impl RawFeed {
    pub fn new(text: String, fetched_at: DateTime<Local>) -> Self {
        RawFeed { text, fetched_at }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }
}

/// Positions of the required fields inside a `;`-split row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSchema {
    pub region: usize,
    pub metric: usize,
    pub date: usize,
    pub value: usize,
    /// Number of fields every row must split into
    pub width: usize,
}

impl FeedSchema {
    /// Locate the required columns in the `;`-joined header text.
    pub fn from_header(header: &str) -> Result<FeedSchema> {
        let names: Vec<&str> = header.split(FIELD_DELIMITER).map(clean).collect();
        let position = |name: &str| {
            names.iter().position(|n| *n == name).ok_or_else(|| {
                BadeaError::InvalidHeader(format!("missing column {:?} in {:?}", name, header))
            })
        };
        Ok(FeedSchema {
            region: position(REGION_COLUMN)?,
            metric: position(METRIC_COLUMN)?,
            date: position(DATE_COLUMN)?,
            value: position(VALUE_COLUMN)?,
            width: names.len(),
        })
    }

    /// Split one row's text and build an observation from it.
    pub fn parse_row(&self, text: &str) -> std::result::Result<Observation, RowError> {
        let fields: Vec<&str> = text.split(FIELD_DELIMITER).map(clean).collect();
        if fields.len() != self.width {
            return Err(RowError::FieldCount {
                expected: self.width,
                found: fields.len(),
            });
        }

        let region = fields[self.region];
        if region.is_empty() {
            return Err(RowError::EmptyField(REGION_COLUMN));
        }
        if !is_known_region(region) {
            return Err(RowError::UnknownRegion(region.to_string()));
        }
        let metric = fields[self.metric];
        if metric.is_empty() {
            return Err(RowError::EmptyField(METRIC_COLUMN));
        }
        let date_text = fields[self.date];
        let date =
            parse_date_dmy(date_text).ok_or_else(|| RowError::DateParse(date_text.to_string()))?;
        let value_text = fields[self.value];
        let value = value_text
            .parse::<i64>()
            .map_err(|_| RowError::ValueParse(value_text.to_string()))?;

        Ok(Observation::new(region, metric, date, value))
    }
}

fn clean(s: &str) -> &str {
    s.trim_start_matches('\u{feff}').trim()
}

/// Per-reason counts of rows left out by [`normalize`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipReport {
    pub field_count: usize,
    pub stray_delimiter: usize,
    pub empty_field: usize,
    pub region: usize,
    pub date: usize,
    pub value: usize,
}

impl SkipReport {
    pub fn record(&mut self, err: &RowError) {
        match err {
            RowError::FieldCount { .. } => self.field_count += 1,
            RowError::StrayDelimiter => self.stray_delimiter += 1,
            RowError::EmptyField(_) => self.empty_field += 1,
            RowError::UnknownRegion(_) => self.region += 1,
            RowError::DateParse(_) => self.date += 1,
            RowError::ValueParse(_) => self.value += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.field_count
            + self.stray_delimiter
            + self.empty_field
            + self.region
            + self.date
            + self.value
    }
}

/// The outcome of normalizing a feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub table: ObservationTable,
    pub skipped: SkipReport,
}

/// Turn the raw feed into a clean table, skipping and counting bad rows.
///
/// Fails only when the header is absent or lacks a required column.
pub fn normalize(feed: &RawFeed) -> Result<Normalized> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(feed.text().as_bytes());

    let schema = {
        let headers = rdr.headers()?;
        match headers.len() {
            0 => return Err(BadeaError::InvalidHeader("feed has no header line".to_string())),
            1 => FeedSchema::from_header(&headers[0])?,
            n => {
                return Err(BadeaError::InvalidHeader(format!(
                    "header spans {} comma-separated columns, expected 1",
                    n
                )))
            }
        }
    };

    let mut rows = Vec::new();
    let mut skipped = SkipReport::default();
    for result in rdr.records() {
        let record = result?;
        match record_to_observation(&schema, &record) {
            Ok(observation) => rows.push(observation),
            Err(err) => {
                warn!("Skipping feed line {}: {}", line(&record), err);
                skipped.record(&err);
            }
        }
    }

    info!(
        "Normalized {} observations ({} rows skipped)",
        rows.len(),
        skipped.total()
    );
    Ok(Normalized {
        table: ObservationTable::new(rows),
        skipped,
    })
}

fn record_to_observation(
    schema: &FeedSchema,
    record: &StringRecord,
) -> std::result::Result<Observation, RowError> {
    if record.len() != 1 {
        return Err(RowError::StrayDelimiter);
    }
    schema.parse_row(&record[0])
}

fn line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BadeaError;
    use chrono::{Local, NaiveDate};

    const HEADER: &str = "Territorio;Medida;Fecha diagnóstico;Valor;Extra";

    fn feed(text: &str) -> RawFeed {
        RawFeed::new(text.to_string(), Local::now())
    }

    #[test]
    fn test_single_row_normalizes() {
        let text = format!("{}\nAndalucía;Casos;15/03/2021;42;x\n", HEADER);
        let normalized = normalize(&feed(&text)).unwrap();
        assert_eq!(normalized.skipped.total(), 0);
        assert_eq!(
            normalized.table.rows(),
            &[Observation::new(
                "Andalucía",
                "Casos",
                NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
                42
            )]
        );
    }

    #[test]
    fn test_invalid_month_is_skipped_and_counted() {
        let text = format!(
            "{}\nAndalucía;Casos;15/03/2021;42;x\nSevilla;Casos;31/13/2021;10;x\n",
            HEADER
        );
        let normalized = normalize(&feed(&text)).unwrap();
        assert_eq!(normalized.table.len(), 1);
        assert!(normalized.table.iter().all(|o| o.region != "Sevilla"));
        assert_eq!(normalized.skipped.date, 1);
        assert_eq!(normalized.skipped.total(), 1);
    }

    #[test]
    fn test_bad_rows_are_counted_by_reason() {
        let text = format!(
            "{}\n\
             Sevilla;Casos;15/03/2021;10\n\
             Sevilla;Casos;15/03/2021;diez;x\n\
             Sevilla;Casos;15/03/2021;1.5;x\n\
             ;Casos;15/03/2021;10;x\n\
             Sevilla;Casos;15/03/2021;10,5;x\n\
             Cádiz;Casos;16/03/2021;-3;x\n",
            HEADER
        );
        let normalized = normalize(&feed(&text)).unwrap();
        let skipped = normalized.skipped;
        assert_eq!(skipped.field_count, 1);
        assert_eq!(skipped.value, 2);
        assert_eq!(skipped.empty_field, 1);
        assert_eq!(skipped.stray_delimiter, 1);
        assert_eq!(skipped.total(), 5);
        // integer parsing accepts a sign, nothing more
        assert_eq!(normalized.table.len(), 1);
        assert_eq!(normalized.table.rows()[0].value, -3);
    }

    #[test]
    fn test_regions_outside_andalucia_are_skipped() {
        let text = format!(
            "{}\n\
             Madrid;Casos;15/03/2021;10;x\n\
             sevilla;Casos;15/03/2021;10;x\n\
             Jaén;Casos;15/03/2021;4;x\n\
             Andalucía;Casos;15/03/2021;14;x\n",
            HEADER
        );
        let normalized = normalize(&feed(&text)).unwrap();
        assert_eq!(normalized.skipped.region, 2);
        assert_eq!(normalized.skipped.total(), 2);
        assert_eq!(normalized.table.regions(), vec!["Jaén", "Andalucía"]);
    }

    #[test]
    fn test_live_feed_shape_with_unnamed_trailing_column() {
        let text = "\u{feff}Territorio;Medida;Fecha diagnóstico;Valor;\n\
                    Granada;Confirmados PCR/TA;01/08/2020; 7 ;\n";
        let normalized = normalize(&feed(text)).unwrap();
        assert_eq!(normalized.table.len(), 1);
        let row = &normalized.table.rows()[0];
        assert_eq!(row.region, "Granada");
        assert_eq!(row.metric, "Confirmados PCR/TA");
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2020, 8, 1).unwrap());
        assert_eq!(row.value, 7);
    }

    #[test]
    fn test_columns_are_located_by_name() {
        let text = "Valor;Fecha diagnóstico;Medida;Territorio\n5;02/01/2021;Casos;Huelva\n";
        let normalized = normalize(&feed(text)).unwrap();
        let row = &normalized.table.rows()[0];
        assert_eq!(row.region, "Huelva");
        assert_eq!(row.value, 5);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let text = "Territorio;Medida;Fecha;Valor;\nSevilla;Casos;15/03/2021;10;\n";
        let result = normalize(&feed(text));
        assert!(matches!(result, Err(BadeaError::InvalidHeader(_))));
    }

    #[test]
    fn test_empty_feed_fails() {
        let result = normalize(&feed(""));
        assert!(matches!(result, Err(BadeaError::InvalidHeader(_))));
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let normalized = normalize(&feed(HEADER)).unwrap();
        assert!(normalized.table.is_empty());
        assert_eq!(normalized.table.date_bounds(), None);
    }
}
