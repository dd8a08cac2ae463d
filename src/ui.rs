use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::domain::series::{HourlySeries, day_labels};
use crate::domain::view::{AreaViewModel, TrendView};

const ROW_PREFIX_WIDTH: usize = 9;

/// Plain-text rendering of one composed area view.
#[must_use]
pub fn render_view_model(view: &AreaViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.area.name);
    let _ = writeln!(out, "  Forecast: {}", view.forecast);
    let _ = writeln!(out, "  Updated:  {}", view.updated.format("%Y-%m-%d %H:%M %:z"));
    let _ = writeln!(
        out,
        "  Location: {:.4}, {:.4}",
        view.area.latitude, view.area.longitude
    );
    let _ = write!(out, "  Trend:    {}", trend_summary(&view.trend));
    out
}

fn trend_summary(trend: &TrendView) -> String {
    match trend {
        TrendView::NotFetched => "no trend data fetched".to_string(),
        TrendView::Unavailable => "no samples for the selected day".to_string(),
        TrendView::Daily(aggregate) => format!(
            "{}: {:.1}°C avg, {}% humidity",
            aggregate.date.format("%Y-%m-%d"),
            aggregate.mean_temperature_c,
            aggregate.mean_humidity_pct
        ),
    }
}

/// Temperature and humidity sparklines over a shared axis, with day-boundary
/// labels underneath.
#[must_use]
pub fn render_trend_chart(series: &HourlySeries, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Temp °C  {}", sparkline(series.temperature_c(), width));
    let _ = writeln!(out, "Hum %    {}", sparkline(series.humidity_pct(), width));
    let _ = write!(
        out,
        "{}{}",
        " ".repeat(ROW_PREFIX_WIDTH),
        label_row(series.timestamps(), width)
    );
    out
}

fn sparkline(values: &[f32], width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if width == 0 {
        return String::new();
    }
    if values.is_empty() {
        return "·".repeat(width);
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(0.001);

    (0..width)
        .map(|i| {
            let idx = (i * values.len() / width).min(values.len() - 1);
            let normalized = ((values[idx] - min) / span).clamp(0.0, 1.0);
            let level = (normalized * (BARS.len() - 1) as f32).round() as usize;
            BARS[level]
        })
        .collect()
}

/// Compresses the day-boundary labels onto the chart axis: each label lands
/// at its sample's column, and a label that would collide with the previous
/// one is dropped.
fn label_row(timestamps: &[NaiveDateTime], width: usize) -> String {
    let mut row = vec![' '; width];
    if timestamps.is_empty() || width == 0 {
        return row.into_iter().collect();
    }

    let labels = day_labels(timestamps);
    let mut next_free = 0;
    for (idx, label) in labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let col = idx * width / timestamps.len();
        if col < next_free || col + label.len() > width {
            continue;
        }
        for (offset, ch) in label.chars().enumerate() {
            row[col + offset] = ch;
        }
        next_free = col + label.len() + 1;
    }

    row.into_iter().collect()
}
