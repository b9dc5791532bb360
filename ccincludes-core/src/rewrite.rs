/// Strip `prefix` from the front of `url` when present; anything else passes through untouched.
///
/// This is a plain byte-prefix match: no case folding, no trailing-slash or query
/// normalisation. Re-applying it to an already stripped path is a no-op.
pub fn rewrite<'a>(url: &'a str, prefix: &str) -> &'a str {
    url.strip_prefix(prefix).unwrap_or(url)
}

/// The `https://{domain}` origin that site-relative URLs are measured against.
pub fn site_prefix(domain: &str) -> String {
    format!("https://{}", domain)
}
