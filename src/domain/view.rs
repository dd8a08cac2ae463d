use chrono::{DateTime, FixedOffset, NaiveDate};

use super::areas::AreaMetadata;
use super::forecast::{ForecastSnapshot, resolve_forecast};
use super::series::{DailyAggregate, HourlySeries, aggregate_day};

/// Trend portion of the view model. Three-way so the UI can tell "no series
/// was fetched" apart from "a series exists but has no samples for the day".
#[derive(Debug, Clone, PartialEq)]
pub enum TrendView {
    NotFetched,
    Unavailable,
    Daily(DailyAggregate),
}

/// The composed, presentation-ready record for one selected area. Built
/// fresh per selection and superseded, never merged, by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaViewModel {
    pub area: AreaMetadata,
    pub forecast: String,
    pub updated: DateTime<FixedOffset>,
    pub trend: TrendView,
}

/// Merges the resolved categorical forecast with the day's aggregated trend.
/// Pure over its inputs: `today` is supplied by the caller, never read from
/// a clock here.
#[must_use]
pub fn compose(
    area: &AreaMetadata,
    snapshot: &ForecastSnapshot,
    series: Option<&HourlySeries>,
    today: NaiveDate,
) -> AreaViewModel {
    let trend = series.map_or(TrendView::NotFetched, |series| trend_for_day(series, today));
    compose_with_trend(area, snapshot, trend)
}

#[must_use]
pub fn trend_for_day(series: &HourlySeries, day: NaiveDate) -> TrendView {
    aggregate_day(series, day).map_or(TrendView::Unavailable, TrendView::Daily)
}

/// Composition seam for callers that memoize the per-day trend themselves.
#[must_use]
pub fn compose_with_trend(
    area: &AreaMetadata,
    snapshot: &ForecastSnapshot,
    trend: TrendView,
) -> AreaViewModel {
    let resolved = resolve_forecast(&area.name, snapshot);
    AreaViewModel {
        area: area.clone(),
        forecast: resolved.text,
        updated: resolved.updated,
        trend,
    }
}
