use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use tracing::debug;

use crate::core::request::TransportMode;
use crate::core::themes;
use crate::error::{PlannerError, Result};
use crate::render::{build_dir_link, build_search_link, render_day};
use crate::types::{Day, DayContent, Itinerary, Maps, Poi, RawDayResponse, Sections};

/// One normalized day of content, ready to be slotted into an itinerary.
#[derive(Debug, Clone)]
pub struct DayPayload {
    pub language_code: String,
    pub sections: Sections,
    pub pois: Vec<Poi>,
    pub maps: Maps,
    pub markdown: String,
}

/// Validate and default a single day's parsed model output.
///
/// Missing or null fields default per the data model; map links are always
/// derived here from label/address. Fails only when the payload is
/// structurally unusable (e.g. `pois` is not an array of objects).
pub fn normalize_day(value: Value, mode: TransportMode) -> Result<DayPayload> {
    let raw: RawDayResponse = serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::MalformedResponse(format!("day payload at {location}: {err}"))
    })?;

    let raw_pois = raw.pois.unwrap_or_default();

    // Waypoints prefer the address, falling back to the name.
    let points: Vec<String> = raw_pois
        .iter()
        .map(|p| {
            non_empty(p.address.as_deref())
                .or_else(|| non_empty(p.name.as_deref()))
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    let dir_link = build_dir_link(&points, mode);

    let pois: Vec<Poi> = raw_pois
        .into_iter()
        .map(|p| {
            let label = non_empty(p.name.as_deref())
                .or_else(|| non_empty(p.address.as_deref()))
                .unwrap_or("POI")
                .to_string();
            let address = p.address.unwrap_or_default().trim().to_string();
            Poi {
                map_link: build_search_link(&label, &address),
                category: non_empty(p.category.as_deref())
                    .unwrap_or("general")
                    .to_string(),
                est_cost_eur: p.est_cost_eur.filter(|cost| *cost >= 0.0),
                label,
                address,
            }
        })
        .collect();

    let language_code = non_empty(raw.language_code.as_deref())
        .unwrap_or("fr")
        .to_lowercase();

    let sections = Sections {
        overview: raw.overview,
        morning: raw.morning,
        lunch: raw.lunch,
        afternoon: raw.afternoon,
        evening: raw.evening,
        logistics: raw.logistics,
        rain_plan: raw.rain_plan,
        recap: raw.recap,
    };

    let markdown = render_day(&sections, &pois, &dir_link, &language_code);
    debug!(lang = %language_code, pois = pois.len(), "normalized day payload");

    Ok(DayPayload {
        language_code,
        sections,
        pois,
        maps: Maps {
            dir_link,
            transport_mode: mode.as_str().to_string(),
        },
        markdown,
    })
}

/// Degrade-gracefully policy: when N>1 days were requested but the pipeline
/// produced only one day's content, replicate that day's stop list across
/// all N requested dates, relabeling each clone with its correct date.
pub fn stretch_days(
    itinerary: &mut Itinerary,
    requested_days: u32,
    start_date: NaiveDate,
    default_start: NaiveTime,
) {
    if requested_days <= 1 || itinerary.days.len() != 1 {
        return;
    }

    let base = itinerary.days.remove(0);
    let stops = base.content.stops_or_synthesized(default_start);

    for d in 0..requested_days {
        let date = start_date + chrono::Duration::days(i64::from(d));
        itinerary.days.push(Day {
            date: date.format("%Y-%m-%d").to_string(),
            theme: themes::day_theme(d as usize).to_string(),
            content: DayContent::Legacy {
                stops: stops.clone(),
            },
        });
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
