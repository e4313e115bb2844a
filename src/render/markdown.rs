use crate::types::{Poi, Sections};

/// Localized heading labels, selected by 2-letter language prefix.
pub struct HeadingSet {
    pub overview: &'static str,
    pub morning: &'static str,
    pub lunch: &'static str,
    pub afternoon: &'static str,
    pub evening: &'static str,
    pub logistics: &'static str,
    pub rain_plan: &'static str,
    pub recap: &'static str,
    pub maps: &'static str,
    pub route: &'static str,
    pub open: &'static str,
    pub map_label: &'static str,
    pub day_word: &'static str,
}

const EN: HeadingSet = HeadingSet {
    overview: "## Overview",
    morning: "## Morning",
    lunch: "## Lunch",
    afternoon: "## Afternoon",
    evening: "## Evening",
    logistics: "## Logistics",
    rain_plan: "## Plan B (weather)",
    recap: "## Recap",
    maps: "## Maps",
    route: "Walking route",
    open: "Open",
    map_label: "Map",
    day_word: "Day",
};

const ES: HeadingSet = HeadingSet {
    overview: "## Resumen",
    morning: "## Mañana",
    lunch: "## Almuerzo",
    afternoon: "## Tarde",
    evening: "## Noche",
    logistics: "## Logística",
    rain_plan: "## Plan B (clima)",
    recap: "## Resumen",
    maps: "## Mapas",
    route: "Ruta a pie",
    open: "Abrir",
    map_label: "Mapa",
    day_word: "Día",
};

const AR: HeadingSet = HeadingSet {
    overview: "## نظرة عامة",
    morning: "## الصباح",
    lunch: "## الغداء",
    afternoon: "## بعد الظهر",
    evening: "## المساء",
    logistics: "## الجوانب اللوجستية",
    rain_plan: "## الخطة البديلة (الطقس)",
    recap: "## خلاصة",
    maps: "## الخرائط",
    route: "مسار سير",
    open: "فتح",
    map_label: "خريطة",
    day_word: "اليوم",
};

const FR: HeadingSet = HeadingSet {
    overview: "## Aperçu",
    morning: "## Matin",
    lunch: "## Midi",
    afternoon: "## Après-midi",
    evening: "## Soir",
    logistics: "## Logistique",
    rain_plan: "## Plan B (météo)",
    recap: "## Récap",
    maps: "## Cartes",
    route: "Itinéraire à pied",
    open: "Ouvrir",
    map_label: "Carte",
    day_word: "Jour",
};

/// French is the default when the code is empty or unsupported.
pub fn headings(lang: &str) -> &'static HeadingSet {
    let lang = lang.trim().to_lowercase();
    if lang.starts_with("en") {
        &EN
    } else if lang.starts_with("es") {
        &ES
    } else if lang.starts_with("ar") {
        &AR
    } else {
        &FR
    }
}

impl HeadingSet {
    fn for_section(&self, name: &str) -> &'static str {
        match name {
            "overview" => self.overview,
            "morning" => self.morning,
            "lunch" => self.lunch,
            "afternoon" => self.afternoon,
            "evening" => self.evening,
            "logistics" => self.logistics,
            "rain_plan" => self.rain_plan,
            _ => self.recap,
        }
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one day's markdown: every section as heading + bullets (empty
/// sections keep their heading), then a maps section listing the
/// directions link and each POI's derived map link.
pub fn render_day(sections: &Sections, pois: &[Poi], dir_link: &str, lang: &str) -> String {
    let h = headings(lang);

    let mut parts: Vec<String> = sections
        .ordered()
        .iter()
        .map(|(name, items)| format!("{}\n{}\n", h.for_section(name), bullets(items)))
        .collect();

    let mut maps_part = format!("{}\n- {}", h.maps, h.route);
    if !dir_link.is_empty() {
        maps_part.push_str(&format!(" • [{}]({})", h.open, dir_link));
    }
    parts.push(maps_part);

    for poi in pois {
        let mut line = format!("- {}", poi.label);
        if !poi.address.is_empty() {
            line.push_str(&format!(" — {}", poi.address));
        }
        line.push_str(&format!(" • [{}]({})", h.map_label, poi.map_link));
        parts.push(line);
    }

    parts.join("\n")
}

/// Localized multi-day title, e.g. `# Jour 2 — 2024-06-02`.
pub fn day_title(lang: &str, number: u32, date: &str) -> String {
    format!("# {} {} — {}", headings(lang).day_word, number, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sections;

    fn poi(label: &str, address: &str) -> Poi {
        Poi {
            label: label.to_string(),
            address: address.to_string(),
            map_link: format!("https://maps.example/{label}"),
            category: "sight".to_string(),
            est_cost_eur: None,
        }
    }

    #[test]
    fn defaults_to_french_headings() {
        assert_eq!(headings("").overview, "## Aperçu");
        assert_eq!(headings("de").overview, "## Aperçu");
        assert_eq!(headings("en-US").overview, "## Overview");
        assert_eq!(headings("ES").morning, "## Mañana");
    }

    #[test]
    fn empty_sections_render_heading_only() {
        let md = render_day(&Sections::default(), &[], "", "en");
        assert!(md.contains("## Morning\n\n"));
        assert!(md.contains("## Plan B (weather)"));
        assert!(!md.contains("[Open]"));
    }

    #[test]
    fn sections_render_as_bullets() {
        let sections = Sections {
            morning: vec!["Louvre at opening".to_string(), "Walk the Tuileries".to_string()],
            ..Sections::default()
        };
        let md = render_day(&sections, &[], "", "en");
        assert!(md.contains("## Morning\n- Louvre at opening\n- Walk the Tuileries\n"));
    }

    #[test]
    fn maps_section_lists_dir_link_and_pois() {
        let pois = vec![poi("Louvre", "Rue de Rivoli"), poi("Panthéon", "")];
        let md = render_day(
            &Sections::default(),
            &pois,
            "https://maps.example/dir",
            "en",
        );
        assert!(md.contains("[Open](https://maps.example/dir)"));
        assert!(md.contains("- Louvre — Rue de Rivoli • [Map](https://maps.example/Louvre)"));
        assert!(md.contains("- Panthéon • [Map](https://maps.example/Panthéon)"));
    }

    #[test]
    fn day_title_is_localized() {
        assert_eq!(day_title("fr", 1, "2024-06-01"), "# Jour 1 — 2024-06-01");
        assert_eq!(day_title("en", 2, "2024-06-02"), "# Day 2 — 2024-06-02");
    }
}
