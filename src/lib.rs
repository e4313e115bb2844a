//! trip-planner-rs: multi-day LLM travel itinerary generation
//!
//! Prompts a chat model once per trip day, parses the JSON reply while
//! tolerating prose and schema drift, and normalizes everything into a
//! validated, day-indexed [`Itinerary`] with derived map links, stop times
//! and localized markdown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{TripPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = TripPlanner::from_env()?;
//!     let request = TripRequest::new(
//!         "Paris",
//!         vec!["museums".to_string(), "coffee".to_string()],
//!     )?
//!     .with_days(2)?;
//!
//!     let itinerary = planner.generate(&request).await?;
//!     println!("{}", itinerary.markdown);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod export;
pub mod render;
pub mod services;
#[cfg(test)]
pub(crate) mod testutil;
pub mod types;

pub use crate::core::{
    day_theme, merge_interests, normalize_day, stretch_days, DayPayload, TransportMode,
    TripPlanner, TripRequest, MAX_TRIP_DAYS, THEME_POOL,
};
pub use crate::error::{PlannerError, Result};
pub use crate::render::{build_dir_link, build_search_link, day_title, render_day};
pub use crate::services::{extract_json, LlmClient};
pub use crate::types::{Day, DayContent, Itinerary, Maps, Poi, Sections, Stop};

#[cfg(feature = "cli")]
pub mod cli;
