pub fn validate_site(site: &str) -> Result<(), String> {
    if site.is_empty() {
        return Err("Site cannot be empty".to_string());
    }
    if site.len() > 253 {
        return Err("Site cannot exceed 253 characters".to_string());
    }
    if site.contains("://") || site.contains('/') {
        return Err(format!("Site '{site}' must be a bare domain"));
    }
    if site.chars().any(char::is_whitespace) {
        return Err(format!("Site '{site}' cannot contain whitespace"));
    }
    Ok(())
}

pub fn validate_destination(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    url::Url::parse(url).map_err(|e| format!("Invalid URL '{url}': {e}"))?;
    Ok(())
}

/// Normalizes a destination typed by the user: trims it and adds an
/// `https://` scheme when no http scheme is present. Returns `None` for
/// blank input.
pub fn normalize_destination(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Lowercases and trims a site entry. Returns `None` for blank input.
pub fn normalize_site(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}
