//! Explicit field validators.
//!
//! Each validator checks one field and returns `Ok(())` or a human-readable
//! violation message. Callers compose the results into an aggregate
//! validation error so that all violations are reported at once, instead of
//! failing on the first.

/// Schemes accepted for a session's content URL.
const ALLOWED_URL_SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

/// Validates a session title: must be non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title must not be empty".to_string());
    }
    Ok(())
}

/// Validates a content URL: absolute, scheme http/https/ftp, and free of
/// spaces and double quotes.
pub fn validate_content_url(url: &str) -> Result<(), String> {
    let scheme = ALLOWED_URL_SCHEMES
        .iter()
        .find(|scheme| url.starts_with(**scheme));
    let Some(scheme) = scheme else {
        return Err("Content URL must start with http://, https:// or ftp://".to_string());
    };
    let rest = &url[scheme.len()..];
    if rest.is_empty() {
        return Err("Content URL must have a host".to_string());
    }
    if rest.contains(' ') || rest.contains('"') {
        return Err("Content URL must not contain spaces or quotes".to_string());
    }
    Ok(())
}

/// Validates an email address shape: `local@domain` with a dotted domain.
///
/// This is a deliberately simple structural check, not a full RFC 5322
/// parser; uniqueness is enforced separately by the user repository.
pub fn validate_email(email: &str) -> Result<(), String> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Email must contain '@'".to_string());
    };
    if local.is_empty() || domain.is_empty() {
        return Err("Email must have a local part and a domain".to_string());
    }
    if email.contains(' ') {
        return Err("Email must not contain spaces".to_string());
    }
    if domain.contains('@') {
        return Err("Email must contain exactly one '@'".to_string());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Email domain must contain a dot".to_string());
    }
    Ok(())
}
