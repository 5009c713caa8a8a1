use std::error::Error;
use std::process;

use clap::Parser;
use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod errors;
pub mod functions;
pub mod parsing;
pub mod structs;
pub mod utils;


use api::{fetch_quote_text, send_bark_notification};
use functions::{calculate_nlv, render_json, render_text};
use parsing::parse_quotes;
use structs::{Portfolio, Settings};

const SETTINGS_PATH: &str = "settings.json";
const PORTFOLIO_PATH: &str = "portfolio.json";

/* A daily portfolio value notifier for long-term investors. */
#[derive(Parser, Debug)]
#[command(about = "A daily portfolio value notifier for long-term investors")]
struct Cli {
    /// Output the report as a string
    #[arg(short, long)]
    show: bool,

    /// Output the report as a JSON
    #[arg(short, long)]
    json: bool,
}

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.show && cli.json {
        eprintln!("Error: Please choose either --show or --json");
        return;
    }

    if let Err(e) = run(&cli) {
        error!(error = %e, "Run failed");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load(SETTINGS_PATH)?;
    let portfolio = Portfolio::load(PORTFOLIO_PATH)?;

    let mut symbols: Vec<String> = portfolio.holdings.keys().cloned().collect();
    symbols.push(settings.benchmark_index.clone());

    let raw_data = fetch_quote_text(&symbols)?;
    let quotes = parse_quotes(&raw_data);
    let result = calculate_nlv(&portfolio, &quotes, &settings);

    if cli.json {
        println!("{}", render_json(&result, &settings.benchmark_name)?);
    } else if cli.show {
        println!("{}", render_text(&result, true));
    } else {
        let body = render_text(&result, false);
        send_bark_notification(&settings, &result.market_comment, &body);
    }

    return Ok(());
}
