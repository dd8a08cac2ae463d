use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error(
        "hourly series arrays differ in length: {timestamps} timestamps, {temperatures} temperatures, {humidities} humidities"
    )]
    LengthMismatch {
        timestamps: usize,
        temperatures: usize,
        humidities: usize,
    },
}

/// Hourly temperature/humidity samples for a single reference point.
///
/// Timestamps are naive local datetimes in the zone the series was requested
/// for; index `i` across the three arrays describes one sample. Construction
/// goes through [`HourlySeries::new`] so the equal-length invariant holds for
/// every value of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    timestamps: Vec<NaiveDateTime>,
    temperature_c: Vec<f32>,
    humidity_pct: Vec<f32>,
}

impl HourlySeries {
    pub fn new(
        timestamps: Vec<NaiveDateTime>,
        temperature_c: Vec<f32>,
        humidity_pct: Vec<f32>,
    ) -> Result<Self, SeriesError> {
        if timestamps.len() != temperature_c.len() || timestamps.len() != humidity_pct.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                temperatures: temperature_c.len(),
                humidities: humidity_pct.len(),
            });
        }

        Ok(Self {
            timestamps,
            temperature_c,
            humidity_pct,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    #[must_use]
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    #[must_use]
    pub fn temperature_c(&self) -> &[f32] {
        &self.temperature_c
    }

    #[must_use]
    pub fn humidity_pct(&self) -> &[f32] {
        &self.humidity_pct
    }
}

/// Mean temperature and humidity over one calendar day of hourly samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub mean_temperature_c: f32,
    pub mean_humidity_pct: i32,
}

/// Chart axis labels: `day/month` (no leading zeros) at the first hour of
/// each calendar day, empty strings elsewhere. Output length always equals
/// input length; a series that starts mid-day never labels its first day.
#[must_use]
pub fn day_labels(timestamps: &[NaiveDateTime]) -> Vec<String> {
    timestamps
        .iter()
        .map(|ts| {
            if ts.hour() == 0 {
                format!("{}/{}", ts.day(), ts.month())
            } else {
                String::new()
            }
        })
        .collect()
}

/// Averages the samples whose date equals `target`, or `None` when no sample
/// falls on that day. Matching values are summed in sorted order, so the
/// result does not depend on sample order within the series.
#[must_use]
pub fn aggregate_day(series: &HourlySeries, target: NaiveDate) -> Option<DailyAggregate> {
    let mut temps = Vec::new();
    let mut humidities = Vec::new();
    for (idx, ts) in series.timestamps().iter().enumerate() {
        if ts.date() == target {
            temps.push(series.temperature_c()[idx]);
            humidities.push(series.humidity_pct()[idx]);
        }
    }

    if temps.is_empty() {
        return None;
    }

    Some(DailyAggregate {
        date: target,
        mean_temperature_c: round_to_tenth(ordered_mean(&mut temps)),
        mean_humidity_pct: round_half_up(ordered_mean(&mut humidities)),
    })
}

fn ordered_mean(values: &mut [f32]) -> f64 {
    values.sort_by(f32::total_cmp);
    let sum: f64 = values.iter().copied().map(f64::from).sum();
    sum / values.len() as f64
}

/// Round half up, not half away from zero: 50.5 -> 51, -2.5 -> -2.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Round half up to one decimal place: 2.25 -> 2.3.
#[must_use]
pub fn round_to_tenth(value: f64) -> f32 {
    ((value * 10.0 + 0.5).floor() / 10.0) as f32
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}
