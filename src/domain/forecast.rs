use chrono::{DateTime, FixedOffset};

/// Sentinel forecast text for an area missing from the snapshot.
pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub area: String,
    pub forecast: String,
}

/// One published round of categorical 2-hour forecasts, all sharing a single
/// update timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSnapshot {
    pub update_timestamp: DateTime<FixedOffset>,
    pub entries: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedForecast {
    pub text: String,
    pub updated: DateTime<FixedOffset>,
}

/// Looks up the forecast for `area_name` by exact name match, first entry
/// wins. A miss resolves to [`NO_DATA`] rather than an error, and always
/// carries the snapshot's own update timestamp so the caller has something
/// displayable.
#[must_use]
pub fn resolve_forecast(area_name: &str, snapshot: &ForecastSnapshot) -> ResolvedForecast {
    let text = snapshot
        .entries
        .iter()
        .find(|entry| entry.area == area_name)
        .map_or(NO_DATA, |entry| entry.forecast.as_str());

    ResolvedForecast {
        text: text.to_string(),
        updated: snapshot.update_timestamp,
    }
}
