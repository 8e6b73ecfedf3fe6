//! Dataset Export
//!
//! Writes the chart datasets as JSON or CSV.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::charts::{ChartKind, COUNSELOR_RATIOS, DROPOUT_REASONS, INTERVENTION_TREND};
use crate::error::{SiteError, SiteResult};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(SiteError::Serialization(format!("unsupported format: {}", other))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Every dataset in one document
#[derive(Debug, Serialize)]
pub struct AllDatasets {
    pub pie: &'static [crate::charts::Slice],
    pub bar: &'static [crate::charts::RatioBar],
    pub area: &'static [crate::charts::InterventionPoint],
}

pub fn all_datasets() -> AllDatasets {
    AllDatasets {
        pie: &DROPOUT_REASONS,
        bar: &COUNSELOR_RATIOS,
        area: &INTERVENTION_TREND,
    }
}

/// Pretty JSON for one chart, or all of them when `chart` is `None`
pub fn to_json(chart: Option<ChartKind>) -> SiteResult<String> {
    let json = match chart {
        None => serde_json::to_string_pretty(&all_datasets())?,
        Some(ChartKind::Pie) => serde_json::to_string_pretty(&DROPOUT_REASONS)?,
        Some(ChartKind::Bar) => serde_json::to_string_pretty(&COUNSELOR_RATIOS)?,
        Some(ChartKind::Area) => serde_json::to_string_pretty(&INTERVENTION_TREND)?,
    };
    Ok(json)
}

/// CSV with a header row for one chart
pub fn write_csv<W: Write>(chart: ChartKind, writer: W) -> SiteResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    match chart {
        ChartKind::Pie => DROPOUT_REASONS.iter().try_for_each(|r| csv.serialize(r))?,
        ChartKind::Bar => COUNSELOR_RATIOS.iter().try_for_each(|r| csv.serialize(r))?,
        ChartKind::Area => INTERVENTION_TREND.iter().try_for_each(|r| csv.serialize(r))?,
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv(chart: ChartKind) -> SiteResult<String> {
    let mut buf = Vec::new();
    write_csv(chart, &mut buf)?;
    String::from_utf8(buf).map_err(|e| SiteError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_all() {
        let json = to_json(None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pie"].as_array().unwrap().len(), 5);
        assert_eq!(value["bar"][1]["students"], 385.0);
        assert_eq!(value["area"][0]["semester"], "S1");
    }

    #[test]
    fn test_json_single_chart() {
        let json = to_json(Some(ChartKind::Pie)).unwrap();
        assert!(json.contains("Emotional Stress"));
        assert!(!json.contains("semester"));
    }

    #[test]
    fn test_csv() {
        let csv = to_csv(ChartKind::Area).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("semester,no_intervention,early_counselling"));
        assert_eq!(lines.next(), Some("S1,12.0,4.0"));
        assert_eq!(csv.lines().count(), 7);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
