/// Rotating pool of daily themes used to diversify prompts across a trip.
pub const THEME_POOL: [&str; 7] = [
    "museums & landmarks",
    "neighborhoods & hidden gems",
    "parks & outdoors",
    "food & markets",
    "architecture & photography spots",
    "family-friendly activities",
    "nightlife & entertainment",
];

/// Theme for a 0-based day index; periodic with period 7.
pub fn day_theme(index: usize) -> &'static str {
    THEME_POOL[index % THEME_POOL.len()]
}

/// Append the daily theme to the user's interests, deduplicating while
/// preserving first-occurrence order.
pub fn merge_interests(interests: &[String], theme: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(interests.len() + 1);
    for candidate in interests.iter().map(String::as_str).chain([theme]) {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }
        if !merged.iter().any(|seen| seen == candidate) {
            merged.push(candidate.to_string());
        }
    }
    merged
}
