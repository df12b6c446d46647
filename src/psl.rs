//! Boundary to the [Public Suffix List](https://publicsuffix.org), the
//! community-maintained database of domain suffixes under which independent
//! parties register names. A cookie scoped at or above such a suffix would be
//! visible to unrelated registrants, so the jar rejects it.
//!
//! The dataset itself is external state: callers parse a copy of the list
//! into a [publicsuffix::List] and hand it to the jar through
//! [CookieJarConfig](crate::CookieJarConfig). A jar without a list performs
//! no public-suffix rejection.

use publicsuffix::List;
use publicsuffix::Psl;

/// Returns the shortest domain of `host` upon which a cookie may be set, for
/// example `example.com` for `a.b.example.com`.
///
/// Returns `None` when `host` is itself a public suffix (or, for a host with
/// an unlisted top-level label, when `host` is that bare label).
pub fn public_suffix(list: &List, host: &str) -> Option<String> {
    let registrable = list.domain(host.as_bytes())?;

    Some(String::from_utf8_lossy(registrable.as_bytes()).into_owned())
}
