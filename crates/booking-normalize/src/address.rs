//! City and country resolution.

/// Resolve `(city, country)` from explicit fields or a free-text address.
///
/// Explicit fields win when both are non-blank. Otherwise the address is
/// split on commas and the last two non-empty segments are read as
/// `..., City, Country`; a single segment is taken as the city alone. With
/// no usable address, whichever explicit fields exist are returned. Never
/// fails: unknown parts come back as empty strings.
pub fn extract_city_country(
    address_text: Option<&str>,
    explicit_city: Option<&str>,
    explicit_country: Option<&str>,
) -> (String, String) {
    if let (Some(city), Some(country)) = (non_blank(explicit_city), non_blank(explicit_country)) {
        return (city.to_string(), country.to_string());
    }

    let parts: Vec<&str> = address_text
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [.., city, country] => (city.to_string(), country.to_string()),
        [city] => (city.to_string(), String::new()),
        [] => (trimmed(explicit_city), trimmed(explicit_country)),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
