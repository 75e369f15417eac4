/// Sender used by the Push to Kindle service when none is configured.
pub const DEFAULT_SENDER: &str = "kindle@fivefilters.org";

const KINDLE_DOMAIN: &str = "kindle.com";

fn split_address(address: &str) -> Option<(&str, &str)> {
    let (local, domain) = address.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

/// Loose email check: `local@domain.tld`, exactly one `@` and a dot
/// somewhere inside the domain.
pub fn is_email_address(address: &str) -> bool {
    match split_address(address) {
        Some((_, domain)) => domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1),
        None => false,
    }
}

/// Kindle delivery addresses live on kindle.com or one of its subdomains
/// (e.g. free.kindle.com).
pub fn is_kindle_address(address: &str) -> bool {
    match split_address(address) {
        Some((_, domain)) => {
            let domain = domain.to_ascii_lowercase();
            domain == KINDLE_DOMAIN || domain.ends_with(&format!(".{KINDLE_DOMAIN}"))
        }
        None => false,
    }
}
