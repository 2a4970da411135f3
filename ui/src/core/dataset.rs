//! Monthly variance records and the validated readings derived from them.
//!
//! The source document looks like:
//! ```json
//! { "baseTemperature": 8.66,
//!   "monthlyVariance": [ { "year": 1753, "month": 1, "variance": -1.366 } ] }
//! ```
//! Every record becomes exactly one [`Reading`], which in turn becomes exactly
//! one grid cell keyed by `(year, month)`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use super::error::{HeatmapError, Result};
use super::scale;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyVariance {
    pub year: i32,
    pub month: u8,
    pub variance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl TemperatureDataset {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Grid coordinate of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub year: i32,
    pub month: u8,
}

/// A record with its derived calendar fields. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub year: i32,
    pub month: Month,
    /// First day of the reading's month.
    pub date: Date,
    pub variance: f64,
    /// `base_temperature + variance`.
    pub temperature: f64,
}

impl Reading {
    fn derive(index: usize, record: &MonthlyVariance, base_temperature: f64) -> Result<Self> {
        let month = Month::try_from(record.month).map_err(|_| HeatmapError::InvalidMonth {
            index,
            month: record.month,
        })?;
        if !record.variance.is_finite() {
            return Err(HeatmapError::InvalidVariance { index });
        }
        let date = Date::from_calendar_date(record.year, month, 1).map_err(|_| {
            HeatmapError::InvalidYear {
                index,
                year: record.year,
            }
        })?;

        Ok(Self {
            year: record.year,
            month,
            date,
            variance: record.variance,
            temperature: base_temperature + record.variance,
        })
    }

    pub fn key(&self) -> CellKey {
        CellKey {
            year: self.year,
            month: self.month as u8,
        }
    }

    pub fn month_number(&self) -> u8 {
        self.month as u8
    }
}

/// Validated dataset ready for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub base_temperature: f64,
    pub readings: Vec<Reading>,
}

impl Heatmap {
    pub fn from_dataset(dataset: TemperatureDataset) -> Result<Self> {
        if dataset.monthly_variance.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }

        let base_temperature = dataset.base_temperature;
        let readings = dataset
            .monthly_variance
            .iter()
            .enumerate()
            .map(|(index, record)| Reading::derive(index, record, base_temperature))
            .collect::<Result<Vec<_>>>()?;

        let mut seen = BTreeSet::new();
        for (index, reading) in readings.iter().enumerate() {
            if !seen.insert(reading.key()) {
                return Err(HeatmapError::DuplicateCell {
                    index,
                    year: reading.year,
                    month: reading.month_number(),
                });
            }
        }

        Ok(Self {
            base_temperature,
            readings,
        })
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn year_extent(&self) -> (i32, i32) {
        let first = self.readings.first().map(|r| r.year).unwrap_or_default();
        self.readings
            .iter()
            .fold((first, first), |(lo, hi), r| (lo.min(r.year), hi.max(r.year)))
    }

    pub fn month_extent(&self) -> (u8, u8) {
        let months = self.distinct_months();
        match (months.first(), months.last()) {
            (Some(lo), Some(hi)) => (*lo, *hi),
            _ => (1, 12),
        }
    }

    pub fn variance_extent(&self) -> (f64, f64) {
        scale::extent(self.readings.iter().map(|r| r.variance)).unwrap_or((0.0, 0.0))
    }

    pub fn temperature_extent(&self) -> (f64, f64) {
        let (lo, hi) = self.variance_extent();
        (self.base_temperature + lo, self.base_temperature + hi)
    }

    pub fn distinct_years(&self) -> BTreeSet<i32> {
        self.readings.iter().map(|r| r.year).collect()
    }

    pub fn distinct_months(&self) -> BTreeSet<u8> {
        self.readings.iter().map(Reading::month_number).collect()
    }

    pub fn reading(&self, key: CellKey) -> Option<&Reading> {
        self.readings.iter().find(|r| r.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(records: serde_json::Value) -> TemperatureDataset {
        serde_json::from_value(json!({
            "baseTemperature": 8.66,
            "monthlyVariance": records,
        }))
        .unwrap()
    }

    #[test]
    fn parses_camel_case_document() {
        let raw = r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1753,"month":1,"variance":-1.366}]}"#;
        let parsed = TemperatureDataset::from_json(raw).unwrap();
        assert_eq!(parsed.base_temperature, 8.66);
        assert_eq!(parsed.monthly_variance.len(), 1);
        assert_eq!(parsed.monthly_variance[0].year, 1753);
    }

    #[test]
    fn derives_calendar_fields_once() {
        let heatmap = Heatmap::from_dataset(dataset(json!([
            { "year": 1800, "month": 3, "variance": 0.5 }
        ])))
        .unwrap();

        let reading = &heatmap.readings[0];
        assert_eq!(reading.month, Month::March);
        assert_eq!(reading.date.year(), 1800);
        assert_eq!(reading.date.day(), 1);
        assert!((reading.temperature - 9.16).abs() < 1e-9);
        assert_eq!(reading.key(), CellKey { year: 1800, month: 3 });
    }

    #[test]
    fn rejects_month_out_of_range() {
        let err = Heatmap::from_dataset(dataset(json!([
            { "year": 1800, "month": 1, "variance": 0.1 },
            { "year": 1800, "month": 13, "variance": 0.1 }
        ])))
        .unwrap_err();

        assert!(matches!(err, HeatmapError::InvalidMonth { index: 1, month: 13 }));
    }

    #[test]
    fn rejects_two_records_for_the_same_cell() {
        let err = Heatmap::from_dataset(dataset(json!([
            { "year": 1800, "month": 1, "variance": -3.0 },
            { "year": 1800, "month": 1, "variance": 4.0 },
            { "year": 1801, "month": 2, "variance": 0.0 }
        ])))
        .unwrap_err();

        assert!(matches!(
            err,
            HeatmapError::DuplicateCell { index: 1, year: 1800, month: 1 }
        ));
    }

    #[test]
    fn rejects_empty_dataset() {
        let err = Heatmap::from_dataset(dataset(json!([]))).unwrap_err();
        assert!(matches!(err, HeatmapError::EmptyDataset));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = TemperatureDataset::from_json("{\"baseTemperature\": \"warm\"}").unwrap_err();
        assert!(matches!(err, HeatmapError::Decode(_)));
    }

    #[test]
    fn extents_cover_all_readings() {
        let heatmap = Heatmap::from_dataset(dataset(json!([
            { "year": 1900, "month": 2, "variance": -2.0 },
            { "year": 1850, "month": 11, "variance": 1.5 },
            { "year": 1875, "month": 6, "variance": 0.0 }
        ])))
        .unwrap();

        assert_eq!(heatmap.year_extent(), (1850, 1900));
        assert_eq!(heatmap.month_extent(), (2, 11));
        assert_eq!(heatmap.variance_extent(), (-2.0, 1.5));
        assert_eq!(heatmap.distinct_years().len(), 3);
    }
}
