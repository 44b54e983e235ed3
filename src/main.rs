//! Outfit CLI
//!
//! Short-term forecast with clothing advice for Korean regions, and a clothing
//! store locator for Cheonan.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use outfit_core::App;
use outfit_ui::{
    store_locator, weather_dashboard, Notice, NoticeLevel, StoreCommand, StoreView,
    WeatherCommand, WeatherView,
};
use outfit_weather::{ForecastTable, REGIONS};

#[derive(Parser)]
#[command(name = "outfit")]
#[command(author, version, about = "Weather-based clothing advice and store locator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable forecast regions
    Regions,

    /// Show the latest short-term forecast and clothing advice
    Weather {
        /// Region name, e.g. 서울 (defaults to weather.default_region)
        #[arg(short, long)]
        region: Option<String>,

        /// Print every forecast time, not only the nearest one
        #[arg(long)]
        table: bool,
    },

    /// Search clothing stores around the configured center
    Stores {
        /// Kakao REST API key (falls back to secrets.toml)
        #[arg(long, env = "KAKAO_API_KEY")]
        api_key: Option<String>,

        /// Store to highlight, as numbered in the list
        #[arg(short, long)]
        select: Option<usize>,

        /// Write the map as a standalone HTML page
        #[arg(short, long)]
        map: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    outfit_core::init()?;
    let mut app = App::new()?;

    let ok = match cli.command {
        Commands::Regions => {
            for region in REGIONS.iter() {
                println!("{}\t(nx={}, ny={})", region.name, region.grid.nx, region.grid.ny);
            }
            true
        }
        Commands::Weather { region, table } => weather(&app, region, table).await?,
        Commands::Stores {
            api_key,
            select,
            map,
        } => stores(&app, api_key, select, map).await?,
    };

    app.shutdown()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn weather(app: &App, region: Option<String>, table: bool) -> Result<bool> {
    let mut dashboard = weather_dashboard(app.config(), app.secrets())?;

    if let Some(region) = region {
        let view = dashboard.handle(WeatherCommand::SelectRegion(region)).await;
        print_notices(&view.notices);
        if !view.notices.is_empty() {
            return Ok(false);
        }
    }

    let view = dashboard.handle(WeatherCommand::Fetch).await;
    print_weather(&view, table);
    Ok(!view.has_errors())
}

fn print_weather(view: &WeatherView, table: bool) {
    print_notices(&view.notices);

    if let Some(current) = &view.current {
        println!();
        println!("기온        {} ℃", current.temperature);
        println!("하늘 상태   {}", current.sky);
        println!("강수 형태   {}", current.precipitation);
        println!("강수 확률   {} %", current.precipitation_chance);
        println!("풍속        {} m/s", current.wind_speed);
        println!("습도        {} %", current.humidity);
    }

    if table && !view.table.is_empty() {
        println!();
        print_table(&view.table);
    }
}

fn print_table(table: &ForecastTable) {
    let categories: Vec<&str> = table.categories().collect();

    let mut header = String::from("fcstDate\tfcstTime");
    for category in &categories {
        header.push('\t');
        header.push_str(category);
    }
    header.push_str("\tsky_status\tpty_status");
    println!("{}", header);

    for row in table.rows() {
        let mut line = format!("{}\t{}", row.fcst_date, row.fcst_time);
        for category in &categories {
            line.push('\t');
            line.push_str(row.get(category).unwrap_or("-"));
        }
        line.push('\t');
        line.push_str(row.sky_status.map(|s| s.label()).unwrap_or("-"));
        line.push('\t');
        line.push_str(row.pty_status.map(|p| p.label()).unwrap_or("-"));
        println!("{}", line);
    }
}

async fn stores(
    app: &App,
    api_key: Option<String>,
    select: Option<usize>,
    map: Option<PathBuf>,
) -> Result<bool> {
    let api_key = api_key
        .or_else(|| app.secrets().places_key().map(str::to_string))
        .unwrap_or_default();

    let mut locator = store_locator(app.config())?;
    let mut view = locator.handle(StoreCommand::Load { api_key }).await;

    if let Some(number) = select {
        ensure!(number >= 1, "store numbers start at 1");
        if !view.stores.is_empty() {
            view = locator.handle(StoreCommand::Select(number - 1)).await;
        }
    }

    print_stores(&view);

    if let (Some(path), Some(map_view)) = (map, &view.map) {
        let html = map_view.to_html()?;
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write map to {}", path.display()))?;
        println!();
        println!("지도: {}", path.display());
    }

    let warned = view.notices.iter().any(|n| n.level == NoticeLevel::Warning);
    Ok(!view.has_errors() && !warned)
}

fn print_stores(view: &StoreView) {
    print_notices(&view.notices);

    let selected_id = view.selected.as_ref().map(|s| s.id.as_str());
    for (label, store) in view.labels.iter().zip(&view.stores) {
        let marker = if Some(store.id.as_str()) == selected_id {
            "▶"
        } else {
            " "
        };
        println!("{} {}", marker, label);
    }

    if let Some(store) = &view.selected {
        println!();
        println!("{}", store.place_name);
        println!("  주소: {}", store.road_address_name);
        println!("  카카오맵: {}", store.place_url);
    }
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        let prefix = match notice.level {
            NoticeLevel::Success => "✔",
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Warning => "⚠",
            NoticeLevel::Error => "✖",
        };
        println!("{} {}", prefix, notice.message);
    }
}
