//! Shared validation helpers. Each returns `true` when the value is valid.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) -> bool {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
        return false;
    }
    true
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> bool {
    if value.is_nan() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
        return false;
    }
    true
}

/// Push an error if `value` is empty or whitespace.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
        return false;
    }
    true
}

/// Push an error if a set URL lacks an http(s) scheme.
pub(crate) fn validate_http_url(errors: &mut Vec<String>, name: &str, value: Option<&str>) -> bool {
    match value {
        Some(url) if !(url.starts_with("https://") || url.starts_with("http://")) => {
            errors.push(format!("{name} = {url:?} must start with http:// or https://"));
            false
        }
        _ => true,
    }
}
