use std::env;

use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::lookup::MealLookup;
use crate::renderer::render_plain;

pub fn logger_init(module_path: &str) {
    let level = if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
        == "debug"
    {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("neis_meal_rs", level)
        .filter_module(module_path, level)
        .init();
}

/// Prints pending alerts, then whatever is visible.
pub async fn print_view(lookup: &MealLookup) {
    let view = lookup.view();
    let mut view = view.write().await;

    for alert in view.alerts.drain(..) {
        println!("! {}", alert);
    }
    print!("{}", render_plain(&view));
}

/// One line = one search. Empty line clears the date field, `q` quits.
pub async fn run_prompt_loop(lookup: &MealLookup) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("\n날짜 (YYYY-MM-DD), 종료: q");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "q" {
            break;
        }

        lookup.set_date(line).await;
        if let Err(e) = lookup.search().await {
            log::debug!("search rejected: {}", e);
        }
        print_view(lookup).await;
    }

    Ok(())
}
