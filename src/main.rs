use clap::Parser;
use pivotwatch::tui::run_tui;
use pivotwatch::types::MarketSnapshot;
use pivotwatch::{build_snapshot, Config, MarketDataService, YahooChartClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ticker to load on startup (market suffix optional, e.g. 2330 or 2330.TW)
    symbol: Option<String>,

    /// Print the snapshot to stdout and exit instead of opening the dashboard
    #[arg(long, default_value_t = false)]
    headless: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing. The TUI owns the terminal, so logs stay off there
    // unless RUST_LOG asks for them; headless runs log to stderr.
    let default_filter = if cli.headless { "pivotwatch=info" } else { "off" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = Config::from_env();
    if let Some(symbol) = cli.symbol {
        config.default_symbol = symbol;
    }

    let provider = Arc::new(YahooChartClient::new(config.http_timeout));
    let market = Arc::new(MarketDataService::new(provider, config.cache_ttl));

    if cli.headless {
        info!("Fetching snapshot for {}", config.default_symbol);
        let snapshot = build_snapshot(&market, &config, &config.default_symbol).await?;
        print_summary(&snapshot);
        return Ok(());
    }

    run_tui(config, market).await?;
    Ok(())
}

/// Plain-text rendition of the dashboard for scripts and quick checks.
fn print_summary(snap: &MarketSnapshot) {
    println!("{}  ({} daily bars, {} intraday bars)", snap.instrument, snap.daily.len(), snap.intraday.len());
    println!(
        "reference {}  H {:.2}  L {:.2}  C {:.2}",
        format_day(snap.reference.time),
        snap.reference.high,
        snap.reference.low,
        snap.reference.close
    );
    println!();
    for (name, value) in snap.pivots.entries() {
        println!("  {:<4} {:>10.2}", name, value);
    }
    println!();
    if let Some(price) = snap.last_price() {
        println!("  last {:>10.2}", price);
    }
    match snap.breakout_target {
        Some(target) => println!("  breakout target {:.2}", target),
        None => println!("  breakout target n/a"),
    }
    for point in &snap.deductions {
        println!(
            "  deduction {:>3} bars back: {:.2} ({})",
            point.offset,
            point.close,
            format_day(point.time)
        );
    }
    if let Some(band) = snap.bands.last() {
        println!(
            "  bollinger {:.2} / {:.2} / {:.2}",
            band.upper, band.middle, band.lower
        );
    }
}

fn format_day(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "--".to_string())
}
