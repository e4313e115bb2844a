use std::time::Duration;

use tracing::info;

use crate::core::normalize::{self, normalize_day};
use crate::core::request::TripRequest;
use crate::core::themes;
use crate::error::{PlannerError, Result};
use crate::render::markdown::day_title;
use crate::services::extract::extract_json;
use crate::services::llm_client::LlmClient;
use crate::services::prompt;
use crate::types::{Day, DayContent, Itinerary};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Multi-day orchestrator.
///
/// Generates each day in sequence (client → parser → normalizer →
/// renderer) and aggregates the results into one [`Itinerary`]. Any day's
/// failure aborts the whole request; no partial itinerary is returned.
#[derive(Debug)]
pub struct TripPlanner {
    client: LlmClient,
    timeout: Duration,
}

impl TripPlanner {
    pub fn new(api_key: String) -> Self {
        Self {
            client: LlmClient::new(api_key),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `OPENAI_API_KEY` and optional `OPENAI_BASE_URL` /
    /// `OPENROUTER_BASE_URL` from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            PlannerError::Config(
                "OPENAI_API_KEY environment variable must be set before creating a TripPlanner"
                    .to_string(),
            )
        })?;
        let mut planner = Self::new(api_key);
        if let Ok(base_url) =
            std::env::var("OPENAI_BASE_URL").or_else(|_| std::env::var("OPENROUTER_BASE_URL"))
        {
            planner.client.set_base_url(base_url);
        }
        Ok(planner)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.client.set_model(model);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate a full multi-day itinerary for the request.
    pub async fn generate(&self, request: &TripRequest) -> Result<Itinerary> {
        if request.city.trim().is_empty() {
            return Err(PlannerError::Precondition(
                "city must be set before creating an itinerary".to_string(),
            ));
        }
        if request.interests.iter().all(|i| i.trim().is_empty()) {
            return Err(PlannerError::Precondition(
                "at least one interest must be set before creating an itinerary".to_string(),
            ));
        }

        info!(
            city = %request.city,
            days = request.days,
            start_date = %request.start_date,
            mode = %request.transport_mode,
            "generating itinerary"
        );

        let system = prompt::system_instruction();
        let mut days: Vec<Day> = Vec::with_capacity(request.days as usize);
        let mut digests: Vec<String> = Vec::with_capacity(request.days as usize);
        let mut language_code: Option<String> = None;

        for d in 0..request.days {
            let date = request.start_date + chrono::Duration::days(i64::from(d));
            let date_str = date.format("%Y-%m-%d").to_string();
            let theme = themes::day_theme(d as usize);
            let day_interests = themes::merge_interests(&request.interests, theme);
            let user = prompt::human_instruction(&request.city, &day_interests);

            let raw = self.client.complete(&system, &user, self.timeout).await?;
            let value = extract_json(&raw)?;
            let payload = normalize_day(value, request.transport_mode)?;

            // Language is detected once, on the first day, and assumed
            // constant for the trip.
            let title_lang = language_code
                .get_or_insert_with(|| payload.language_code.clone())
                .clone();

            digests.push(format!(
                "{}\n\n{}\n",
                day_title(&title_lang, d + 1, &date_str),
                payload.markdown
            ));
            days.push(Day {
                date: date_str,
                theme: theme.to_string(),
                content: DayContent::Agent {
                    sections: payload.sections,
                    pois: payload.pois,
                    maps: payload.maps,
                },
            });
        }

        let mut itinerary = Itinerary {
            // City is always the caller's value, never the model echo.
            city: request.city.clone(),
            language_code: language_code.unwrap_or_else(|| "fr".to_string()),
            days,
            markdown: digests.join("\n---\n"),
        };

        normalize::stretch_days(
            &mut itinerary,
            request.days,
            request.start_date,
            request.default_start_time,
        );

        info!(days = itinerary.days.len(), "itinerary generated");
        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_rejects_blank_interests() {
        // Bypass TripRequest::new validation to exercise the orchestrator's
        // own precondition check.
        let mut request = TripRequest::new("Paris", vec!["museums".to_string()]).unwrap();
        request.interests = vec!["  ".to_string()];

        let planner = TripPlanner::new("test-key".to_string());
        let err = planner.generate(&request).await.unwrap_err();
        assert_eq!(err.error_code(), "PRECONDITION_ERROR");
    }

    #[tokio::test]
    async fn generate_rejects_blank_city() {
        let mut request = TripRequest::new("Paris", vec!["museums".to_string()]).unwrap();
        request.city = String::new();

        let planner = TripPlanner::new("test-key".to_string());
        let err = planner.generate(&request).await.unwrap_err();
        assert_eq!(err.error_code(), "PRECONDITION_ERROR");
    }
}
