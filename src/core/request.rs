use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlannerError, Result};

/// Upper bound on the trip length a single request may ask for.
pub const MAX_TRIP_DAYS: u32 = 14;

/// Travel mode encoded into the directions link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walking,
    Bicycling,
    Driving,
    Transit,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Bicycling => "bicycling",
            TransportMode::Driving => "driving",
            TransportMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "walking" => Ok(TransportMode::Walking),
            "bicycling" => Ok(TransportMode::Bicycling),
            "driving" => Ok(TransportMode::Driving),
            "transit" => Ok(TransportMode::Transit),
            other => Err(PlannerError::Config(format!(
                "invalid transport mode `{other}` (expected walking|bicycling|driving|transit)"
            ))),
        }
    }
}

/// Immutable description of one generation request.
///
/// Built whole and validated up front, then passed into
/// [`TripPlanner::generate`](crate::TripPlanner::generate); there is no
/// mutable planner state to set in the right order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub city: String,
    pub interests: Vec<String>,
    pub days: u32,
    pub start_date: NaiveDate,
    pub transport_mode: TransportMode,
    /// Clock time assigned to the first synthesized stop of each day.
    pub default_start_time: NaiveTime,
}

impl TripRequest {
    /// Create a request for `city` with at least one interest. Trip length
    /// defaults to 1 day starting today, walking, 09:00 start.
    pub fn new(city: impl Into<String>, interests: Vec<String>) -> Result<Self> {
        let city = city.into().trim().to_string();
        let interests: Vec<String> = interests
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();

        if city.is_empty() {
            return Err(PlannerError::Precondition(
                "city must be set before creating an itinerary".to_string(),
            ));
        }
        if interests.is_empty() {
            return Err(PlannerError::Precondition(
                "at least one interest must be set before creating an itinerary".to_string(),
            ));
        }

        Ok(Self {
            city,
            interests,
            days: 1,
            start_date: chrono::Local::now().date_naive(),
            transport_mode: TransportMode::default(),
            default_start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid constant time"),
        })
    }

    /// Split a comma-separated interests string, dropping blanks.
    pub fn interests_from_str(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect()
    }

    pub fn with_days(mut self, days: u32) -> Result<Self> {
        if !(1..=MAX_TRIP_DAYS).contains(&days) {
            return Err(PlannerError::Config(format!(
                "trip length must be between 1 and {MAX_TRIP_DAYS} days, got {days}"
            )));
        }
        self.days = days;
        Ok(self)
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_transport_mode(mut self, mode: TransportMode) -> Self {
        self.transport_mode = mode;
        self
    }

    pub fn with_default_start_time(mut self, start_time: NaiveTime) -> Self {
        self.default_start_time = start_time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_city_and_interests() {
        let err = TripRequest::new("  ", vec!["museums".to_string()]).unwrap_err();
        assert_eq!(err.error_code(), "PRECONDITION_ERROR");

        let err = TripRequest::new("Paris", vec![" ".to_string()]).unwrap_err();
        assert_eq!(err.error_code(), "PRECONDITION_ERROR");
    }

    #[test]
    fn rejects_out_of_range_trip_length() {
        let request = TripRequest::new("Paris", vec!["museums".to_string()]).unwrap();
        assert!(request.clone().with_days(0).is_err());
        assert!(request.clone().with_days(15).is_err());
        assert_eq!(request.with_days(14).unwrap().days, 14);
    }

    #[test]
    fn transport_mode_parses_and_rejects() {
        assert_eq!(
            "Walking".parse::<TransportMode>().unwrap(),
            TransportMode::Walking
        );
        assert_eq!(
            " transit ".parse::<TransportMode>().unwrap(),
            TransportMode::Transit
        );
        let err = "teleport".parse::<TransportMode>().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn interests_split_drops_blanks() {
        let interests = TripRequest::interests_from_str("museums, , coffee ,");
        assert_eq!(interests, vec!["museums", "coffee"]);
    }
}
