use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use journal_config::ConfigManager;
use journal_marketdata::{CandleRequest, MarketDataClient};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Market-data companion for the trading journal")]
struct Args {
    /// Path to an optional YAML configuration file; environment variables
    /// are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch live quotes for one or more currency pairs
    Quote {
        symbols: Vec<String>,
    },
    /// Fetch historical daily candles for a currency pair
    Candles {
        symbol: String,

        /// Range start (YYYY-MM-DD or RFC 3339); defaults to 24h ago
        #[arg(long)]
        start: Option<String>,

        /// Range end (YYYY-MM-DD or RFC 3339); defaults to now
        #[arg(long)]
        end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);

    let manager = match &args.config {
        Some(path) => ConfigManager::from_file(path)?,
        None => ConfigManager::from_env()?,
    };
    manager.validate()?;

    // The composition root owns the client; configuration is injected at
    // construction time, not read from process-wide globals.
    let client = MarketDataClient::new(manager.market_data().clone());

    match args.command {
        Command::Quote { symbols } => {
            info!("Fetching live quotes for {} pair(s)", symbols.len());
            for (symbol, result) in symbols.iter().zip(client.get_live_prices(&symbols).await) {
                match result {
                    Ok(quote) => println!("{}", serde_json::to_string(&quote)?),
                    Err(e) => eprintln!("{}: {}", symbol, e),
                }
            }
        }
        Command::Candles { symbol, start, end } => {
            let request = CandleRequest {
                start_time: start.as_deref().map(parse_bound).transpose()?,
                end_time: end.as_deref().map(parse_bound).transpose()?,
                ..Default::default()
            };
            match client.get_historical_candles(&symbol, request).await {
                Ok(series) => {
                    info!("Fetched {} candle(s) for {}", series.candles.len(), series.symbol);
                    for candle in &series.candles {
                        println!("{}", serde_json::to_string(candle)?);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}", symbol, e);
                    std::process::exit(1);
                }
            }
        }
    }

    client.close_session();

    Ok(())
}

fn init_logging(debug: bool) {
    let env_filter = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_bound(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")?;
    Ok(date.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_accepts_common_formats() {
        assert!(parse_bound("2024-01-01").is_ok());
        assert!(parse_bound("2024-01-01T10:00:00").is_ok());
        assert!(parse_bound("2024-01-01T10:00:00Z").is_ok());
        assert!(parse_bound("yesterday").is_err());
    }
}
