use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use sg_weather_map::domain::series::{HourlySeries, aggregate_day, day_labels};

fn base_midnight() -> NaiveDateTime {
    "2025-07-07T00:00:00".parse().expect("valid base timestamp")
}

fn base_day() -> NaiveDate {
    base_midnight().date()
}

/// (hour offset from the base midnight, temperature, humidity)
fn sample() -> impl Strategy<Value = (i64, f32, f32)> {
    (0i64..168, 20.0f32..36.0, 40.0f32..100.0)
}

fn series_from(samples: &[(i64, f32, f32)]) -> HourlySeries {
    HourlySeries::new(
        samples
            .iter()
            .map(|(h, _, _)| base_midnight() + chrono::Duration::hours(*h))
            .collect(),
        samples.iter().map(|(_, temp, _)| *temp).collect(),
        samples.iter().map(|(_, _, hum)| *hum).collect(),
    )
    .expect("equal lengths by construction")
}

proptest! {
    #[test]
    fn labels_preserve_length_and_mark_midnights(
        samples in proptest::collection::vec(sample(), 0..96)
    ) {
        let series = series_from(&samples);
        let labels = day_labels(series.timestamps());
        prop_assert_eq!(labels.len(), series.len());

        for (ts, label) in series.timestamps().iter().zip(&labels) {
            if ts.hour() == 0 {
                prop_assert_eq!(label, &format!("{}/{}", ts.day(), ts.month()));
            } else {
                prop_assert!(label.is_empty());
            }
        }
    }

    #[test]
    fn aggregate_is_empty_iff_no_sample_on_day(
        samples in proptest::collection::vec(sample(), 0..96),
        day_offset in 0i64..10,
    ) {
        let series = series_from(&samples);
        let target = base_day() + chrono::Duration::days(day_offset);
        let day_has_samples = samples.iter().any(|(h, _, _)| h / 24 == day_offset);
        prop_assert_eq!(aggregate_day(&series, target).is_some(), day_has_samples);
    }

    #[test]
    fn aggregate_ignores_sample_order(
        (original, shuffled) in proptest::collection::vec(sample(), 1..96)
            .prop_flat_map(|samples| {
                let shuffled = Just(samples.clone()).prop_shuffle();
                (Just(samples), shuffled)
            })
    ) {
        prop_assert_eq!(
            aggregate_day(&series_from(&original), base_day()),
            aggregate_day(&series_from(&shuffled), base_day())
        );
    }
}
