//! Site URL helpers

/// Reduce a user-supplied site to its bare host: `https://acme.atlassian.net/`
/// becomes `acme.atlassian.net`.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_string()
}

/// Browser link for an issue on the given site.
pub fn issue_url(domain: &str, key: &str) -> String {
    format!("https://{}/browse/{key}", normalize_domain(domain))
}

/// API root for a site, keeping an explicit `http://` for local fakes.
pub fn api_base_url(site: &str) -> String {
    let trimmed = site.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
