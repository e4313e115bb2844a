pub mod normalize;
pub mod planner;
pub mod request;
pub mod themes;

pub use normalize::{normalize_day, stretch_days, DayPayload};
pub use planner::TripPlanner;
pub use request::{TransportMode, TripRequest, MAX_TRIP_DAYS};
pub use themes::{day_theme, merge_interests, THEME_POOL};
