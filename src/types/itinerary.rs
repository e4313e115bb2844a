use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A generated multi-day itinerary. Value object owned by the caller;
/// produced fresh on every generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Destination city, always the caller-supplied value regardless of
    /// what the model echoed back.
    pub city: String,
    /// 2-letter (or BCP-47-ish) language code detected on the first day.
    pub language_code: String,
    /// One entry per requested trip day, dates contiguous and increasing.
    pub days: Vec<Day>,
    /// Aggregate markdown digest across all days.
    pub markdown: String,
}

/// A single itinerary day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// ISO-8601 calendar date (YYYY-MM-DD).
    pub date: String,
    /// Rotating daily theme label.
    pub theme: String,
    #[serde(flatten)]
    pub content: DayContent,
}

/// The two day shapes the pipeline must reconcile: the legacy flat stop
/// list and the richer sectioned POI form produced by the JSON prompt.
///
/// Only a non-empty `stops` sequence is authoritative: such a payload
/// keeps its stops untouched even when `pois` coexist, and the two shapes
/// never mix. An empty or missing `stops` key reads as the agent form so
/// stops can be synthesized from the POIs.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DayContent {
    Legacy {
        stops: Vec<Stop>,
    },
    Agent {
        #[serde(default)]
        sections: Sections,
        #[serde(default)]
        pois: Vec<Poi>,
        #[serde(default)]
        maps: Maps,
    },
}

impl<'de> Deserialize<'de> for DayContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Shape {
            #[serde(default)]
            stops: Vec<Stop>,
            #[serde(default)]
            sections: Sections,
            #[serde(default)]
            pois: Vec<Poi>,
            #[serde(default)]
            maps: Maps,
        }

        let shape = Shape::deserialize(deserializer)?;
        if shape.stops.is_empty() {
            Ok(DayContent::Agent {
                sections: shape.sections,
                pois: shape.pois,
                maps: shape.maps,
            })
        } else {
            Ok(DayContent::Legacy { stops: shape.stops })
        }
    }
}

impl DayContent {
    /// Resolve this day to the legacy stop list consumed by calendar and
    /// table exports.
    ///
    /// Existing stops are returned unchanged. Agent-form days synthesize
    /// one stop per POI: the clock starts at `default_start` and advances
    /// 90 minutes per POI with standard 60-minute rollover.
    pub fn stops_or_synthesized(&self, default_start: NaiveTime) -> Vec<Stop> {
        match self {
            DayContent::Legacy { stops } => stops.clone(),
            DayContent::Agent { pois, .. } => {
                let step = chrono::Duration::minutes(90);
                let mut clock = default_start;
                let mut stops = Vec::with_capacity(pois.len());
                for poi in pois {
                    let duration_min = if poi.category == "food" { 60 } else { 90 };
                    stops.push(Stop {
                        time: clock.format("%H:%M").to_string(),
                        name: poi.label.clone(),
                        category: poi.category.clone(),
                        lat: None,
                        lon: None,
                        duration_min: Some(duration_min),
                        cost_est: poi.est_cost_eur,
                        notes: poi.address.clone(),
                    });
                    clock = clock.overflowing_add_signed(step).0;
                }
                stops
            }
        }
    }
}

/// The fixed bullet sections of an agent-form day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub overview: Vec<String>,
    #[serde(default)]
    pub morning: Vec<String>,
    #[serde(default)]
    pub lunch: Vec<String>,
    #[serde(default)]
    pub afternoon: Vec<String>,
    #[serde(default)]
    pub evening: Vec<String>,
    #[serde(default)]
    pub logistics: Vec<String>,
    #[serde(default)]
    pub rain_plan: Vec<String>,
    #[serde(default)]
    pub recap: Vec<String>,
}

impl Sections {
    /// Sections in rendering order, paired with their canonical names.
    pub fn ordered(&self) -> [(&'static str, &[String]); 8] {
        [
            ("overview", &self.overview),
            ("morning", &self.morning),
            ("lunch", &self.lunch),
            ("afternoon", &self.afternoon),
            ("evening", &self.evening),
            ("logistics", &self.logistics),
            ("rain_plan", &self.rain_plan),
            ("recap", &self.recap),
        ]
    }
}

/// A point of interest sourced from model output. `map_link` is always
/// derived from label/address, never trusted from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poi {
    pub label: String,
    #[serde(default)]
    pub address: String,
    pub map_link: String,
    pub category: String,
    #[serde(default)]
    pub est_cost_eur: Option<f64>,
}

/// Per-day map artifacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Maps {
    /// Multi-stop directions URL; empty when fewer than 2 usable points.
    #[serde(default)]
    pub dir_link: String,
    #[serde(default)]
    pub transport_mode: String,
}

/// A scheduled visit with a concrete clock time; the canonical unit
/// consumed by the calendar and table exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// "HH:MM"; never non-empty-but-unparseable, so the iCalendar export
    /// contract stays satisfiable.
    pub time: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub cost_est: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::nine_am;

    fn poi(label: &str, category: &str) -> Poi {
        Poi {
            label: label.to_string(),
            address: String::new(),
            map_link: String::new(),
            category: category.to_string(),
            est_cost_eur: None,
        }
    }

    #[test]
    fn synthesized_times_advance_by_90_minutes() {
        let content = DayContent::Agent {
            sections: Sections::default(),
            pois: vec![poi("Louvre", "museum"), poi("Café", "food"), poi("Seine", "view")],
            maps: Maps::default(),
        };

        let stops = content.stops_or_synthesized(nine_am());
        let times: Vec<&str> = stops.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["09:00", "10:30", "12:00"]);
        assert_eq!(stops[0].duration_min, Some(90));
        assert_eq!(stops[1].duration_min, Some(60)); // food
    }

    #[test]
    fn legacy_stops_pass_through_unchanged() {
        let stops = vec![Stop {
            time: "14:15".to_string(),
            name: "Pantheon".to_string(),
            category: "sight".to_string(),
            lat: Some(48.846),
            lon: Some(2.346),
            duration_min: Some(45),
            cost_est: Some(11.5),
            notes: "Pre-book".to_string(),
        }];
        let content = DayContent::Legacy {
            stops: stops.clone(),
        };

        let resolved = content.stops_or_synthesized(nine_am());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].time, "14:15");
        assert_eq!(resolved[0].notes, "Pre-book");
        assert_eq!(resolved[0].lat, Some(48.846));
    }

    #[test]
    fn day_with_stops_deserializes_as_legacy_even_with_pois() {
        let json = serde_json::json!({
            "date": "2024-06-01",
            "theme": "museums & landmarks",
            "stops": [{"time": "09:00", "name": "Louvre", "category": "museum"}],
            "pois": [{"label": "Ignored", "map_link": "", "category": "sight"}]
        });

        let day: Day = serde_json::from_value(json).unwrap();
        match day.content {
            DayContent::Legacy { ref stops } => {
                assert_eq!(stops[0].name, "Louvre");
            }
            DayContent::Agent { .. } => panic!("expected legacy shape"),
        }
    }

    #[test]
    fn empty_stops_alongside_pois_synthesize_from_pois() {
        // An empty stops array is not authoritative; the POIs are.
        let json = serde_json::json!({
            "date": "2024-06-01",
            "theme": "museums & landmarks",
            "stops": [],
            "pois": [{
                "label": "Louvre",
                "address": "Rue de Rivoli",
                "map_link": "https://maps.example/louvre",
                "category": "museum",
                "est_cost_eur": 22.0
            }]
        });

        let day: Day = serde_json::from_value(json).unwrap();
        let stops = day.content.stops_or_synthesized(nine_am());
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].time, "09:00");
        assert_eq!(stops[0].name, "Louvre");
        assert_eq!(stops[0].duration_min, Some(90));
    }

    #[test]
    fn clock_rolls_over_midnight() {
        let pois: Vec<Poi> = (0..4).map(|i| poi(&format!("p{i}"), "sight")).collect();
        let content = DayContent::Agent {
            sections: Sections::default(),
            pois,
            maps: Maps::default(),
        };
        let late = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let stops = content.stops_or_synthesized(late);
        let times: Vec<&str> = stops.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["22:00", "23:30", "01:00", "02:30"]);
    }
}
