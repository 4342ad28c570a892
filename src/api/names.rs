//! Domain name normalization shared by providers.

/// Record types whose data is a hostname and must carry a trailing dot.
const HOSTNAME_TYPES: [&str; 4] = ["CNAME", "MX", "NS", "SRV"];

/// Qualifies `name` against `domain` and appends the trailing dot.
///
/// `www` and `www.example.com` both become `www.example.com.` for the
/// `example.com` zone.
pub fn fqdn_name(name: &str, domain: &str) -> String {
    let name = name.trim_end_matches('.');
    let domain = domain.trim_end_matches('.');

    if name == domain || name.ends_with(&format!(".{domain}")) {
        format!("{name}.")
    } else {
        format!("{name}.{domain}.")
    }
}

/// Same as [`fqdn_name`] without the trailing dot. This is the form handed
/// back to callers.
pub fn full_name(name: &str, domain: &str) -> String {
    fqdn_name(name, domain).trim_end_matches('.').to_string()
}

/// Appends a single trailing dot.
pub fn record_name(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}

/// Normalizes record content into the vendor's `data` field.
pub fn record_data(record_type: &str, content: &str) -> String {
    if HOSTNAME_TYPES.contains(&record_type) {
        record_name(content)
    } else {
        content.to_string()
    }
}
