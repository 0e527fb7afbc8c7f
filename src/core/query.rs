use crate::models::{ListingQuery, PreferenceRecord};

/// Translate stored preferences into a listings filter
///
/// Fixed mapping: `max_budget -> max_rent`, `location_area -> city`.
/// Absent or blank values are left out rather than sent empty.
pub fn listing_query(preferences: &PreferenceRecord) -> ListingQuery {
    let city = preferences
        .location_area
        .as_deref()
        .filter(|area| !area.trim().is_empty())
        .map(str::to_string);

    ListingQuery {
        max_rent: preferences.max_budget,
        city,
    }
}

/// Query-string pairs for `GET /listings`
pub fn to_query_params(query: &ListingQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(2);

    if let Some(max_rent) = query.max_rent {
        params.push(("max_rent", format_number(max_rent)));
    }
    if let Some(city) = &query.city {
        params.push(("city", city.clone()));
    }

    params
}

/// Shortest decimal form: `2000`, `1999.5`
pub fn format_number(value: f64) -> String {
    // f64 Display already drops a zero fraction
    format!("{}", value)
}
