use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::series::{HourlySeries, parse_datetime};

const TREND_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// All series timestamps are local to this zone; day bucketing compares the
/// naive dates the API returns, never UTC.
const SERIES_TIMEZONE: &str = "Asia/Singapore";

/// Single reference point for the location-wide series (central Singapore).
pub const REFERENCE_LATITUDE: f64 = 1.29;
pub const REFERENCE_LONGITUDE: f64 = 103.85;

/// Inclusive date range for one hourly series fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct TrendClient {
    client: Client,
    base_url: String,
}

impl Default for TrendClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(TREND_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        range: TrendRange,
    ) -> Result<HourlySeries> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", "temperature_2m,relativehumidity_2m".to_string()),
                ("timezone", SERIES_TIMEZONE.to_string()),
                ("start_date", range.start.format("%Y-%m-%d").to_string()),
                ("end_date", range.end.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await
            .context("trend request failed")?
            .error_for_status()
            .context("trend request returned non-success status")?;

        let payload: TrendResponse = response
            .json()
            .await
            .context("failed to parse trend payload")?;

        map_series(payload.hourly)
    }
}

fn map_series(hourly: HourlyBlock) -> Result<HourlySeries> {
    let mut timestamps = Vec::with_capacity(hourly.time.len());
    for raw in &hourly.time {
        let ts = parse_datetime(raw).with_context(|| format!("invalid hourly timestamp {raw:?}"))?;
        timestamps.push(ts);
    }

    HourlySeries::new(timestamps, hourly.temperature_2m, hourly.relativehumidity_2m)
        .context("hourly payload arrays are inconsistent")
}

#[derive(Debug, Deserialize)]
struct TrendResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f32>,
    relativehumidity_2m: Vec<f32>,
}
