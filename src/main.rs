use anyhow::Result;
use clap::Parser;
use sg_weather_map::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    sg_weather_map::run(cli).await
}
