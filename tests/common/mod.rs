#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use sg_weather_map::domain::{
    areas::AreaMetadata,
    forecast::{ForecastEntry, ForecastSnapshot},
    series::HourlySeries,
};

pub fn bishan() -> AreaMetadata {
    AreaMetadata {
        name: "Bishan".to_string(),
        latitude: 1.3508,
        longitude: 103.8485,
    }
}

pub fn fixture_areas() -> Vec<AreaMetadata> {
    vec![
        AreaMetadata {
            name: "Ang Mo Kio".to_string(),
            latitude: 1.375,
            longitude: 103.839,
        },
        bishan(),
        AreaMetadata {
            name: "Bukit Batok".to_string(),
            latitude: 1.353,
            longitude: 103.754,
        },
    ]
}

pub fn fixture_timestamp() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-07-07T14:05:00+08:00").expect("valid fixture timestamp")
}

pub fn fixture_snapshot() -> ForecastSnapshot {
    ForecastSnapshot {
        update_timestamp: fixture_timestamp(),
        entries: vec![
            ForecastEntry {
                area: "Bishan".to_string(),
                forecast: "Light Rain".to_string(),
            },
            ForecastEntry {
                area: "Ang Mo Kio".to_string(),
                forecast: "Partly Cloudy (Day)".to_string(),
            },
        ],
    }
}

pub fn datetime(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid fixture timestamp")
}

pub fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid fixture date")
}

/// Hourly series starting at midnight on `start`, one sample per hour.
pub fn fixture_series(start: &str, hours: usize) -> HourlySeries {
    let base = datetime(start);
    let timestamps: Vec<NaiveDateTime> = (0..hours)
        .map(|h| base + chrono::Duration::hours(h as i64))
        .collect();
    let temperature: Vec<f32> = (0..hours).map(|h| 27.0 + (h % 6) as f32 * 0.5).collect();
    let humidity: Vec<f32> = (0..hours).map(|h| 75.0 + (h % 4) as f32).collect();
    HourlySeries::new(timestamps, temperature, humidity).expect("valid fixture series")
}
