use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::{Arg, Command};
use std::env;
use tracing::{error, info};

use crate::core::request::{TransportMode, TripRequest};
use crate::core::TripPlanner;
use crate::export;

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("Generate a multi-day travel itinerary with an LLM")
        .arg(
            Arg::new("city")
                .help("Destination city")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("interests")
                .help("Comma-separated interests (e.g. \"museums, coffee\")")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("COUNT")
                .help("Number of trip days (1-14)")
                .default_value("1"),
        )
        .arg(
            Arg::new("start-date")
                .short('s')
                .long("start-date")
                .value_name("YYYY-MM-DD")
                .help("First day of the trip (defaults to today)"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .help("Transport mode: walking | bicycling | driving | transit")
                .default_value("walking"),
        )
        .arg(
            Arg::new("start-time")
                .long("start-time")
                .value_name("HH:MM")
                .help("Default start time for synthesized stops")
                .default_value("09:00"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Chat model to use"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("API key (or set OPENAI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL env vars)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-call request timeout in seconds")
                .default_value("30"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: markdown | json | ics")
                .default_value("markdown"),
        )
        .get_matches();

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("OPENAI_API_KEY").ok())
        .context("API key is required. Set OPENAI_API_KEY environment variable or use --api-key")?;

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("OPENAI_BASE_URL").ok())
        .or_else(|| env::var("OPENROUTER_BASE_URL").ok());

    let city = matches.get_one::<String>("city").unwrap();
    let interests = TripRequest::interests_from_str(matches.get_one::<String>("interests").unwrap());

    let days: u32 = matches
        .get_one::<String>("days")
        .unwrap()
        .parse()
        .context("--days must be an integer")?;
    let mode: TransportMode = matches.get_one::<String>("mode").unwrap().parse()?;
    let start_time = NaiveTime::parse_from_str(matches.get_one::<String>("start-time").unwrap(), "%H:%M")
        .context("--start-time must be HH:MM")?;

    let mut request = TripRequest::new(city.clone(), interests)?
        .with_days(days)?
        .with_transport_mode(mode)
        .with_default_start_time(start_time);
    if let Some(start_date) = matches.get_one::<String>("start-date") {
        let date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .context("--start-date must be YYYY-MM-DD")?;
        request = request.with_start_date(date);
    }

    let timeout_seconds: u64 = matches
        .get_one::<String>("timeout")
        .unwrap()
        .parse()
        .context("--timeout must be an integer")?;

    let mut planner =
        TripPlanner::new(api_key).with_timeout(std::time::Duration::from_secs(timeout_seconds));
    if let Some(model) = matches.get_one::<String>("model") {
        planner = planner.with_model(model.as_str());
    }
    if let Some(base_url) = base_url {
        planner = planner.with_base_url(base_url);
    }

    info!(city = %request.city, days = request.days, "running trip planner");

    let itinerary = match planner.generate(&request).await {
        Ok(itinerary) => itinerary,
        Err(e) => {
            error!("itinerary generation failed: {}", e);
            return Err(e.into());
        }
    };

    match matches.get_one::<String>("format").unwrap().as_str() {
        "json" => println!("{}", export::to_json(&itinerary)?),
        "ics" => println!("{}", export::to_ics(&itinerary, request.default_start_time)),
        _ => println!("{}", itinerary.markdown),
    }

    Ok(())
}
