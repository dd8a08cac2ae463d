use chrono::NaiveDate;
use clap::Parser;

use crate::data::trend::{REFERENCE_LATITUDE, REFERENCE_LONGITUDE, TrendRange};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sg-weather-map",
    version,
    about = "Singapore weather map explorer: 2-hour area forecasts with hourly trends"
)]
pub struct Cli {
    /// Area to look up (case-insensitive substring match)
    pub area: Option<String>,

    /// Print every known area name and exit
    #[arg(long)]
    pub list_areas: bool,

    /// Read search queries from stdin until EOF
    #[arg(long)]
    pub interactive: bool,

    /// Target day for the trend summary (YYYY-MM-DD, default: today in Singapore)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// First day of the hourly trend fetch (default: today in Singapore)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the hourly trend fetch (default: seven days after start)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Trend reference latitude (requires --lon)
    #[arg(long)]
    pub lat: Option<f64>,

    /// Trend reference longitude (requires --lat)
    #[arg(long)]
    pub lon: Option<f64>,

    /// Skip the hourly trend fetch entirely
    #[arg(long)]
    pub no_trend: bool,

    /// Override the 2-hour forecast endpoint
    #[arg(long)]
    pub snapshot_url: Option<String>,

    /// Override the hourly trend endpoint
    #[arg(long)]
    pub trend_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => {}
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            anyhow::bail!("--end-date must not precede --start-date");
        }
        if self.area.is_none() && !self.list_areas && !self.interactive {
            anyhow::bail!("provide an area to search for, or use --list-areas / --interactive");
        }
        Ok(())
    }

    #[must_use]
    pub fn reference_point(&self) -> (f64, f64) {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => (REFERENCE_LATITUDE, REFERENCE_LONGITUDE),
        }
    }

    #[must_use]
    pub fn trend_range(&self, today: NaiveDate) -> TrendRange {
        let start = self.start_date.unwrap_or(today);
        let end = self.end_date.unwrap_or(start + chrono::Duration::days(7));
        TrendRange { start, end }
    }

    #[must_use]
    pub fn target_date(&self, today: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(today)
    }
}
