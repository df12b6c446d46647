use crate::ParseError;
use crate::psl;
use publicsuffix::List;
use std::net::Ipv4Addr;
use std::net::Ipv6Addr;

/// Computes the canonical form of a host name: surrounding ASCII whitespace
/// trimmed, a single leading `.` stripped and ASCII letters lowercased.
///
/// A name containing non-ASCII characters is converted to its punycode form,
/// see [RFC6265 Section 5.1.2](https://datatracker.ietf.org/doc/html/rfc6265#section-5.1.2).
pub fn canonical_domain(domain: &str) -> Result<String, ParseError> {
    let trimmed = domain.trim();
    let stripped = trimmed.strip_prefix('.').unwrap_or(trimmed);

    if stripped.is_ascii() {
        return Ok(stripped.to_ascii_lowercase());
    }

    idna::domain_to_ascii(stripped)
        .map_err(|_| ParseError::new(format!("Invalid international domain name: {}", stripped)))
}

/// Checks if `host` domain-matches `domain`, as defined in
/// [RFC6265 Section 5.1.3](https://datatracker.ietf.org/doc/html/rfc6265#section-5.1.3).
///
/// Both names are canonicalized first; a name that cannot be canonicalized
/// matches nothing. An IP address matches only on exact equality.
pub fn domain_match(host: &str, domain: &str) -> bool {
    match (canonical_domain(host), canonical_domain(domain)) {
        (Ok(host), Ok(domain)) => domain_match_canonical(&host, &domain),
        _ => false,
    }
}

/// `domain_match` over names already in canonical form.
pub(crate) fn domain_match_canonical(host: &str, domain: &str) -> bool {
    if host == domain {
        return true;
    }

    if !host.ends_with(domain) || host.len() == domain.len() {
        return false;
    }

    // The suffix rule: the byte before the matched suffix must be a dot and
    // the host must be a name, not an address.
    let boundary = host.len() - domain.len();
    host.as_bytes()[boundary - 1] == b'.' && !is_ip_address(host)
}

/// An IPv4 or IPv6 literal, with the URL bracket form tolerated for IPv6.
pub(crate) fn is_ip_address(host: &str) -> bool {
    if host.parse::<Ipv4Addr>().is_ok() {
        return true;
    }

    let unbracketed = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(host);

    unbracketed.parse::<Ipv6Addr>().is_ok()
}

/// Produces `domain` and each of its parent domains, stopping at the shortest
/// domain upon which a cookie may be set.
///
/// Returns `None` when `domain` is itself a public suffix. Store
/// implementations that index by exact domain can probe these keys instead of
/// scanning, see [MemoryCookieStore](crate::MemoryCookieStore).
pub fn permute_domain(domain: &str, list: &List) -> Option<Vec<String>> {
    let suffix = psl::public_suffix(list, domain)?;

    if suffix == domain {
        return Some(vec![domain.to_string()]);
    }

    let prefix = &domain[..domain.len() - suffix.len() - 1];
    let mut current = suffix;
    let mut permutations = vec![current.clone()];

    for label in prefix.rsplit('.') {
        current = format!("{}.{}", label, current);
        permutations.push(current.clone());
    }

    Some(permutations)
}
