pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

use anyhow::Result;
use chrono::{FixedOffset, NaiveDate, Utc};
use tokio::io::AsyncBufReadExt;

use app::state::AppState;
use cli::Cli;
use data::snapshot::SnapshotClient;
use data::trend::TrendClient;
use domain::series::HourlySeries;

const SGT_OFFSET_SECONDS: i32 = 8 * 3600;
const CHART_WIDTH: usize = 72;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let today = today_in_singapore();

    let (catalog, series) = fetch_datasets(&cli, today).await?;
    let mut state = AppState::new(
        catalog.areas,
        catalog.snapshot,
        series,
        cli.target_date(today),
    );

    if cli.list_areas {
        for area in &state.areas {
            println!("{}", area.name);
        }
        return Ok(());
    }

    if let Some(query) = cli.area.as_deref() {
        report_query(&mut state, query);
    }

    if cli.interactive {
        run_interactive(&mut state).await?;
    }

    Ok(())
}

/// The two upstream fetches are independent, so they run concurrently; the
/// composer only ever sees both results (or an explicitly absent series).
async fn fetch_datasets(
    cli: &Cli,
    today: NaiveDate,
) -> Result<(data::snapshot::AreaCatalog, Option<HourlySeries>)> {
    let snapshot_client = cli
        .snapshot_url
        .as_deref()
        .map_or_else(SnapshotClient::new, SnapshotClient::with_base_url);

    if cli.no_trend {
        return Ok((snapshot_client.fetch().await?, None));
    }

    let trend_client = cli
        .trend_url
        .as_deref()
        .map_or_else(TrendClient::new, TrendClient::with_base_url);
    let (latitude, longitude) = cli.reference_point();
    let range = cli.trend_range(today);

    let (catalog, series) = tokio::try_join!(
        snapshot_client.fetch(),
        trend_client.fetch(latitude, longitude, range)
    )?;
    Ok((catalog, Some(series)))
}

fn report_query(state: &mut AppState, query: &str) {
    let Some(view) = state.search(query) else {
        println!("No area matching {query:?}");
        return;
    };
    println!("{}", ui::render_view_model(view));

    if let Some(series) = &state.series {
        println!();
        println!("{}", ui::render_trend_chart(series, CHART_WIDTH));
    }
}

async fn run_interactive(state: &mut AppState) -> Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        report_query(state, line.trim());
    }
    Ok(())
}

fn today_in_singapore() -> NaiveDate {
    let offset = FixedOffset::east_opt(SGT_OFFSET_SECONDS).expect("valid UTC+8 offset");
    Utc::now().with_timezone(&offset).date_naive()
}
