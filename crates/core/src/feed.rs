use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::ChartError;
use crate::models::record::PriceRecord;

// ── Alpha Vantage envelope types ────────────────────────────────────

#[derive(Deserialize)]
struct TimeSeriesEnvelope {
    #[serde(rename = "Time Series (1min)")]
    intraday_1min: Option<HashMap<String, BarFields>>,

    #[serde(rename = "Time Series (5min)")]
    intraday_5min: Option<HashMap<String, BarFields>>,

    #[serde(rename = "Time Series (Daily)")]
    daily: Option<HashMap<String, BarFields>>,

    #[serde(rename = "Weekly Time Series")]
    weekly: Option<HashMap<String, BarFields>>,

    #[serde(rename = "Monthly Time Series")]
    monthly: Option<HashMap<String, BarFields>>,
}

/// All numeric fields arrive string-encoded from the API.
#[derive(Deserialize)]
struct BarFields {
    #[serde(rename = "1. open")]
    open: String,

    #[serde(rename = "2. high")]
    high: String,

    #[serde(rename = "3. low")]
    low: String,

    #[serde(rename = "4. close")]
    close: String,

    #[serde(rename = "5. volume")]
    volume: String,
}

/// Parse an Alpha Vantage TIME_SERIES response into recency-ranked records.
///
/// Accepts any of the known series sections (intraday 1min/5min, Daily,
/// Weekly, Monthly); the metadata block and other envelope fields are
/// ignored. Periods are sorted newest-first by label — the API keys are ISO
/// timestamps, so lexicographic order is chronological — and assigned
/// `order` 1..n.
///
/// No networking happens here: callers hand in the response body of a
/// request they issued themselves.
pub fn parse_time_series(json: &str) -> Result<Vec<PriceRecord>, ChartError> {
    let envelope: TimeSeriesEnvelope = serde_json::from_str(json)?;

    let series = envelope
        .intraday_1min
        .or(envelope.intraday_5min)
        .or(envelope.daily)
        .or(envelope.weekly)
        .or(envelope.monthly)
        .ok_or_else(|| {
            ChartError::FeedFormat("no recognized time series section in payload".to_string())
        })?;

    let mut entries: Vec<(String, BarFields)> = series.into_iter().collect();
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (key, bar))| {
            Ok(PriceRecord {
                order: i as u32 + 1,
                open: parse_field("open", &key, &bar.open)?,
                high: parse_field("high", &key, &bar.high)?,
                low: parse_field("low", &key, &bar.low)?,
                close: parse_field("close", &key, &bar.close)?,
                volume: parse_field("volume", &key, &bar.volume)?,
                key,
            })
        })
        .collect()
}

fn parse_field(field: &'static str, period: &str, value: &str) -> Result<f64, ChartError> {
    value.parse().map_err(|_| ChartError::FieldFormat {
        field,
        period: period.to_string(),
        value: value.to_string(),
    })
}
