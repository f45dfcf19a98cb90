use neis_meal_rs::constants::{API_URL, RELAY_URL};
use neis_meal_rs::data_backend::neis_fetcher::FallbackChain;
use neis_meal_rs::lookup::MealLookup;
use neis_meal_rs::shared_main::{logger_init, print_view, run_prompt_loop};

use clap::Parser;
use log::log_enabled;

/// Daily school meal plan (조식/중식/석식) from the NEIS open API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Date to look up (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,
    /// Keep reading dates from stdin after the first lookup
    #[arg(short, long)]
    interactive: bool,
    /// Enable verbose logging (mostly performance metrics){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
    /// NEIS meal service endpoint
    #[arg(long, env = "NEIS_API_URL", default_value = API_URL)]
    api_url: String,
    /// CORS relay used when the endpoint can't be reached directly
    #[arg(long, env = "NEIS_RELAY_URL", default_value = RELAY_URL)]
    relay_url: String,
    /// Show an error instead of the offline sample when both network paths fail
    #[arg(long)]
    no_offline_sample: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());

    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for performance metrics");
    }

    let chain = FallbackChain::standard(
        reqwest::Client::new(),
        &args.api_url,
        &args.relay_url,
        !args.no_offline_sample,
    );
    let lookup = MealLookup::new(chain);

    let first = match args.date.as_deref() {
        Some(date) => {
            lookup.set_date(date).await;
            lookup.search().await
        }
        None => lookup.on_load().await,
    };
    if let Err(e) = first {
        log::debug!("search rejected: {}", e);
    }
    print_view(&lookup).await;

    if args.interactive {
        run_prompt_loop(&lookup).await?;
    }

    Ok(())
}
