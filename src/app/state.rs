use std::num::NonZeroUsize;

use chrono::NaiveDate;
use lru::LruCache;

use crate::domain::areas::{AreaMetadata, find_area};
use crate::domain::forecast::ForecastSnapshot;
use crate::domain::series::HourlySeries;
use crate::domain::view::{AreaViewModel, TrendView, compose_with_trend, trend_for_day};

const TREND_CACHE_CAPACITY: usize = 16;

/// One session's worth of fetched data plus the single active selection.
///
/// The series identity is fixed for the session, so the per-day trend cache
/// is keyed by date alone.
pub struct AppState {
    pub areas: Vec<AreaMetadata>,
    pub snapshot: ForecastSnapshot,
    pub series: Option<HourlySeries>,
    pub today: NaiveDate,
    pub active: Option<AreaViewModel>,
    trend_cache: LruCache<NaiveDate, TrendView>,
}

impl AppState {
    #[must_use]
    pub fn new(
        areas: Vec<AreaMetadata>,
        snapshot: ForecastSnapshot,
        series: Option<HourlySeries>,
        today: NaiveDate,
    ) -> Self {
        Self {
            areas,
            snapshot,
            series,
            today,
            active: None,
            trend_cache: LruCache::new(
                NonZeroUsize::new(TREND_CACHE_CAPACITY).expect("nonzero cache capacity"),
            ),
        }
    }

    /// Composes the view for `area` and makes it the active selection,
    /// superseding the previous one.
    pub fn select(&mut self, area: &AreaMetadata) -> &AreaViewModel {
        let trend = self.trend_for(self.today);
        let view = compose_with_trend(area, &self.snapshot, trend);
        self.active.insert(view)
    }

    /// Free-text search entry point: resolves the query to an area, then
    /// selects it. `None` means no area matched; the previous selection
    /// stays active.
    pub fn search(&mut self, query: &str) -> Option<&AreaViewModel> {
        let area = find_area(query, &self.areas)?.clone();
        Some(self.select(&area))
    }

    /// Per-day trend over the session series, computed at most once per date.
    pub fn trend_for(&mut self, date: NaiveDate) -> TrendView {
        let Some(series) = &self.series else {
            return TrendView::NotFetched;
        };
        self.trend_cache
            .get_or_insert(date, || trend_for_day(series, date))
            .clone()
    }
}
