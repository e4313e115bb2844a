use url::form_urlencoded::byte_serialize;

use crate::core::request::TransportMode;

/// quote_plus-style encoding: spaces become `+`, reserved characters are
/// percent-encoded.
fn quote_plus(s: &str) -> String {
    byte_serialize(s.trim().as_bytes()).collect()
}

/// Map-search URL for a single place. Pure function of (label, address);
/// model-supplied links are never trusted.
pub fn build_search_link(label: &str, address: &str) -> String {
    let query = if address.trim().is_empty() {
        label.trim().to_string()
    } else {
        format!("{}, {}", label.trim(), address.trim())
    };
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        quote_plus(&query)
    )
}

/// Multi-stop directions URL with ordered waypoints.
///
/// No usable point yields an empty string, a single point falls back to a
/// plain search link; a multi-waypoint route only makes sense from 2 points.
pub fn build_dir_link(points: &[String], mode: TransportMode) -> String {
    let usable: Vec<&str> = points
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();

    match usable.len() {
        0 => String::new(),
        1 => build_search_link(usable[0], ""),
        _ => {
            let path = usable
                .iter()
                .map(|p| quote_plus(p))
                .collect::<Vec<_>>()
                .join("/");
            format!(
                "https://www.google.com/maps/dir/{}?travelmode={}",
                path,
                mode.as_str()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_link_percent_encodes_commas() {
        let link = build_search_link("Notre-Dame, Paris", "");
        assert_eq!(
            link,
            "https://www.google.com/maps/search/?api=1&query=Notre-Dame%2C+Paris"
        );
    }

    #[test]
    fn search_link_joins_label_and_address() {
        let link = build_search_link("Louvre", "Rue de Rivoli");
        assert!(link.ends_with("query=Louvre%2C+Rue+de+Rivoli"));
    }

    #[test]
    fn search_link_is_deterministic() {
        let a = build_search_link("Sacré-Cœur", "Montmartre");
        let b = build_search_link("Sacré-Cœur", "Montmartre");
        assert_eq!(a, b);
    }

    #[test]
    fn dir_link_empty_without_usable_points() {
        assert_eq!(build_dir_link(&[], TransportMode::Walking), "");
        assert_eq!(
            build_dir_link(&["  ".to_string()], TransportMode::Walking),
            ""
        );
    }

    #[test]
    fn dir_link_single_point_is_plain_search() {
        let link = build_dir_link(&["Louvre".to_string()], TransportMode::Walking);
        assert!(link.starts_with("https://www.google.com/maps/search/"));
        assert!(!link.contains("/dir/"));
    }

    #[test]
    fn dir_link_orders_waypoints_and_sets_mode() {
        let points = vec![
            "Louvre".to_string(),
            "Musée d'Orsay".to_string(),
            "Tour Eiffel".to_string(),
        ];
        let link = build_dir_link(&points, TransportMode::Transit);
        assert!(link.starts_with("https://www.google.com/maps/dir/"));
        assert!(link.ends_with("?travelmode=transit"));

        let louvre = link.find("Louvre").unwrap();
        let orsay = link.find("Orsay").unwrap();
        let eiffel = link.find("Eiffel").unwrap();
        assert!(louvre < orsay && orsay < eiffel);
    }
}
