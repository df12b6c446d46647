use chrono::DateTime;
use chrono::Utc;
use log::debug;
use log::warn;
use publicsuffix::List;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io;
use url::Url;

use crate::cookie::cookie_compare;
use crate::domain::canonical_domain;
use crate::domain::domain_match_canonical;
use crate::domain::is_ip_address;
use crate::path::default_path;
use crate::path::path_match;
use crate::psl;
use crate::store::CookieStore;
use crate::store::MemoryCookieStore;
use crate::store::StoreError;
use crate::Cookie;
use crate::HostOnly;
use crate::ParseError;

// Identifier of the serialized jar layout. The token is shared by every user
// agent persisting jars in this layout, so snapshots interchange between
// implementations.
const SERIALIZED_VERSION: &str = "tough-cookie@4.1.3";

/// Error produced by a jar operation.
#[derive(Debug)]
pub enum Error {
    /// Malformed input: a `Set-Cookie` string the parser rejects, a request
    /// URL without a host, a serialized jar that cannot be revived.
    Parse(ParseError),
    /// The cookie's `Domain` attribute names a public suffix.
    PublicSuffix,
    /// The cookie's `Domain` attribute does not cover the request host.
    DomainMismatch,
    /// The cookie (or the stored cookie it would replace) is HttpOnly and
    /// the caller is not an HTTP API.
    HttpOnlyMismatch,
    /// The backing store failed. Store errors always surface, even under
    /// `ignore_error`.
    Store(StoreError),
    /// Reading or writing a serialized jar failed.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(error) => write!(f, "{}", error),
            Error::PublicSuffix => write!(f, "Cookie has domain set to a public suffix"),
            Error::DomainMismatch => write!(f, "Cookie not in this host's domain"),
            Error::HttpOnlyMismatch => {
                write!(f, "Cookie is HttpOnly and this isn't an HTTP API")
            }
            Error::Store(error) => write!(f, "{}", error),
            Error::Json(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(error) => Some(error),
            Error::Store(error) => Some(error.as_ref()),
            Error::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Error {
        Error::Parse(error)
    }
}

/// Options of [CookieJar::set_cookie] and [CookieJar::set_cookie_str].
#[derive(Debug, Clone)]
pub struct SetCookieOptions {
    /// The caller is an HTTP API. A non-HTTP caller may neither set nor
    /// replace an HttpOnly cookie. Defaults to `true`.
    pub http: bool,
    /// Parse the header with [Cookie::parse_loose]. Defaults to `false`.
    pub loose: bool,
    /// Report an unparsable header as "no cookie" instead of an error.
    /// Scoping rejections and store errors still surface. Defaults to
    /// `false`.
    pub ignore_error: bool,
    /// Clock override; the wallclock when absent.
    pub now: Option<DateTime<Utc>>,
}

impl Default for SetCookieOptions {
    fn default() -> SetCookieOptions {
        SetCookieOptions {
            http: true,
            loose: false,
            ignore_error: false,
            now: None,
        }
    }
}

/// Options of [CookieJar::get_cookies] and the header-string conveniences.
#[derive(Debug, Clone)]
pub struct GetCookieOptions {
    /// The caller is an HTTP API; HttpOnly cookies are withheld otherwise.
    /// Defaults to `true`.
    pub http: bool,
    /// Secure-channel override; derived from the URL scheme (`https`, `wss`)
    /// when absent.
    pub secure: Option<bool>,
    /// Drop expired cookies and remove them from the store best-effort.
    /// Defaults to `true`.
    pub expire: bool,
    /// Return cookies from every path under the matched domains instead of
    /// path-matching against the request path. Defaults to `false`.
    pub all_paths: bool,
    /// Clock override; the wallclock when absent.
    pub now: Option<DateTime<Utc>>,
}

impl Default for GetCookieOptions {
    fn default() -> GetCookieOptions {
        GetCookieOptions {
            http: true,
            secure: None,
            expire: true,
            all_paths: false,
            now: None,
        }
    }
}

/// Construction-time configuration of a [CookieJar].
pub struct CookieJarConfig {
    /// Reject cookies whose `Domain` attribute is a public suffix. Only
    /// effective when [public_suffix_list](CookieJarConfig::public_suffix_list)
    /// is supplied. Defaults to `true`.
    pub reject_public_suffixes: bool,
    /// Parse every `Set-Cookie` header in loose mode. Defaults to `false`.
    pub loose: bool,
    /// The public-suffix dataset consulted for rejection, parsed from a copy
    /// of the list published at [publicsuffix.org](https://publicsuffix.org).
    pub public_suffix_list: Option<List>,
}

impl Default for CookieJarConfig {
    fn default() -> CookieJarConfig {
        CookieJarConfig {
            reject_public_suffixes: true,
            loose: false,
            public_suffix_list: None,
        }
    }
}

/// A cookie jar: the stateful container binding cookies to a logical user
/// agent session, as defined in
/// [RFC6265 Section 5.3](https://datatracker.ietf.org/doc/html/rfc6265#section-5.3).
///
/// The jar owns a [CookieStore] (the in-memory reference store by default),
/// resolves the scope of every accepted cookie and answers request URLs with
/// the matching cookies in canonical send order.
///
/// ```rust
/// use cookiejar::CookieJar;
/// use cookiejar::GetCookieOptions;
/// use cookiejar::SetCookieOptions;
/// use url::Url;
///
/// let mut jar = CookieJar::new();
/// let url = Url::parse("http://example.com/").unwrap();
///
/// jar.set_cookie_str("id=a3fWa; Path=/", &url, &SetCookieOptions::default())
///     .unwrap();
///
/// let header = jar
///     .get_cookie_string(&url, &GetCookieOptions::default())
///     .unwrap();
/// assert_eq!(header, "id=a3fWa");
/// ```
pub struct CookieJar<S: CookieStore = MemoryCookieStore> {
    store: S,
    config: CookieJarConfig,
}

impl CookieJar<MemoryCookieStore> {
    /// A jar over a fresh in-memory store with the default configuration.
    pub fn new() -> CookieJar<MemoryCookieStore> {
        CookieJar::with_store(MemoryCookieStore::new())
    }

    /// A jar over a fresh in-memory store with the given configuration.
    pub fn with_config(config: CookieJarConfig) -> CookieJar<MemoryCookieStore> {
        CookieJar::with_store_and_config(MemoryCookieStore::new(), config)
    }

    /// Revives a jar from JSON written by [CookieJar::save_json], backed by
    /// a fresh in-memory store.
    pub fn load_json<R: io::Read>(reader: R) -> Result<CookieJar<MemoryCookieStore>, Error> {
        let serialized: SerializedJar = serde_json::from_reader(reader).map_err(Error::Json)?;

        CookieJar::deserialize(&serialized, MemoryCookieStore::new())
    }
}

impl Default for CookieJar<MemoryCookieStore> {
    fn default() -> CookieJar<MemoryCookieStore> {
        CookieJar::new()
    }
}

impl<S: CookieStore> CookieJar<S> {
    /// A jar over `store` with the default configuration.
    pub fn with_store(store: S) -> CookieJar<S> {
        CookieJar::with_store_and_config(store, CookieJarConfig::default())
    }

    /// A jar over `store` with the given configuration.
    pub fn with_store_and_config(store: S, config: CookieJarConfig) -> CookieJar<S> {
        CookieJar { store, config }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Supplies (or replaces) the public-suffix dataset. Snapshots do not
    /// carry the dataset, so a revived jar needs it handed back to keep
    /// rejecting suffix-scoped cookies.
    pub fn set_public_suffix_list(&mut self, list: List) {
        self.config.public_suffix_list = Some(list);
    }

    /// Parses a `Set-Cookie` header value and stores the cookie for
    /// `url`, see [CookieJar::set_cookie].
    ///
    /// Returns `Ok(None)` when the header is unparsable and
    /// [ignore_error](SetCookieOptions::ignore_error) is set.
    pub fn set_cookie_str(
        &mut self,
        header: &str,
        url: &Url,
        options: &SetCookieOptions,
    ) -> Result<Option<Cookie>, Error> {
        let loose = options.loose || self.config.loose;
        let parsed = if loose {
            Cookie::parse_loose(header)
        } else {
            Cookie::parse(header)
        };

        let cookie = match parsed {
            Ok(cookie) => cookie,
            Err(error) => {
                if options.ignore_error {
                    debug!("ignoring unparsable Set-Cookie header: {}", error);
                    return Ok(None);
                }
                return Err(Error::Parse(error));
            }
        };

        self.set_cookie(cookie, url, options).map(Some)
    }

    /// Stores `cookie` as received from `url`, following the storage model
    /// of [RFC6265 Section 5.3](https://datatracker.ietf.org/doc/html/rfc6265#section-5.3):
    /// the request host must domain-match an explicit `Domain` attribute
    /// (which must not be a public suffix); a cookie without one becomes
    /// host-only; a missing or relative path is replaced by the request's
    /// default path; HttpOnly cookies may only be set or replaced by HTTP
    /// callers. A cookie replacing one at the same (domain, path, key) keeps
    /// the replaced cookie's creation instant.
    ///
    /// Returns the cookie as stored.
    pub fn set_cookie(
        &mut self,
        mut cookie: Cookie,
        url: &Url,
        options: &SetCookieOptions,
    ) -> Result<Cookie, Error> {
        let host = request_host(url)?;
        let now = options.now.unwrap_or_else(Utc::now);

        if let Some(ref domain) = cookie.domain {
            let cookie_domain = canonical_domain(domain)?;

            if self.config.reject_public_suffixes && !is_ip_address(&cookie_domain) {
                if let Some(ref list) = self.config.public_suffix_list {
                    if psl::public_suffix(list, &cookie_domain).is_none() {
                        debug!(
                            "cookie {:?} rejected, domain {} is a public suffix",
                            cookie.key, cookie_domain
                        );
                        return Err(Error::PublicSuffix);
                    }
                }
            }

            if !domain_match_canonical(&host, &cookie_domain) {
                debug!(
                    "cookie {:?} rejected, domain {} does not cover host {}",
                    cookie.key, cookie_domain, host
                );
                return Err(Error::DomainMismatch);
            }

            cookie.domain = Some(cookie_domain);
            cookie.host_only = HostOnly::Domain;
        } else {
            cookie.domain = Some(host);
            cookie.host_only = HostOnly::Host;
        }

        let relative = match cookie.path {
            Some(ref path) => !path.starts_with('/'),
            None => true,
        };
        if relative {
            cookie.path = Some(default_path(url.path()).to_string());
            cookie.path_is_default = true;
        }

        if !options.http && cookie.http_only {
            debug!("cookie {:?} rejected, HttpOnly from a non-HTTP caller", cookie.key);
            return Err(Error::HttpOnlyMismatch);
        }

        let domain = cookie.domain.clone().unwrap_or_default();
        let path = cookie.path.clone().unwrap_or_default();

        let existing = self
            .store
            .find_cookie(&domain, &path, &cookie.key)
            .map_err(Error::Store)?;

        cookie.last_accessed = Some(now);

        match existing {
            Some(old) => {
                if !options.http && old.http_only {
                    debug!(
                        "cookie {:?} rejected, replaces an HttpOnly cookie from a non-HTTP caller",
                        cookie.key
                    );
                    return Err(Error::HttpOnlyMismatch);
                }

                // The replacement keeps the replaced cookie's creation
                // instant but its own creation index
                cookie.creation = old.creation;
                self.store
                    .update_cookie(&old, cookie.clone())
                    .map_err(Error::Store)?;
            }
            None => {
                self.store.put_cookie(cookie.clone()).map_err(Error::Store)?;
            }
        }

        Ok(cookie)
    }

    /// Retrieves the cookies to send with a request to `url`, following
    /// [RFC6265 Section 5.4](https://datatracker.ietf.org/doc/html/rfc6265#section-5.4):
    /// host-only cookies require the exact host, the rest domain-match;
    /// paths must path-match unless [all_paths](GetCookieOptions::all_paths)
    /// is set; Secure and HttpOnly cookies are withheld from insecure and
    /// non-HTTP callers; expired cookies are dropped and removed from the
    /// store best-effort.
    ///
    /// Survivors get their access instant stamped and persisted, and are
    /// returned in canonical send order: longest path first, then oldest
    /// creation.
    pub fn get_cookies(&mut self, url: &Url, options: &GetCookieOptions) -> Result<Vec<Cookie>, Error> {
        let host = request_host(url)?;
        let path = match url.path() {
            "" => "/",
            path => path,
        };
        let secure = options.secure.unwrap_or_else(|| is_secure_scheme(url));
        let now = options.now.unwrap_or_else(Utc::now);

        let search_path = if options.all_paths { None } else { Some(path) };
        let candidates = self
            .store
            .find_cookies(&host, search_path)
            .map_err(Error::Store)?;

        let mut cookies = Vec::new();

        for cookie in candidates {
            let cookie_domain = cookie.domain.as_deref().unwrap_or("");

            match cookie.host_only {
                HostOnly::Host => {
                    if cookie_domain != host {
                        continue;
                    }
                }
                _ => {
                    if !domain_match_canonical(&host, cookie_domain) {
                        continue;
                    }
                }
            }

            if !options.all_paths {
                let cookie_path = cookie.path.as_deref().unwrap_or("");
                if !path_match(path, cookie_path) {
                    continue;
                }
            }

            if cookie.secure && !secure {
                continue;
            }

            if cookie.http_only && !options.http {
                continue;
            }

            if options.expire && cookie.expired(now) {
                let cookie_path = cookie.path.as_deref().unwrap_or("");
                debug!("dropping expired cookie {:?}", cookie.key);
                if let Err(error) = self.store.remove_cookie(cookie_domain, cookie_path, &cookie.key) {
                    warn!("could not remove expired cookie {:?}: {}", cookie.key, error);
                }
                continue;
            }

            cookies.push(cookie);
        }

        // Retrieval is an access: stamp and persist before handing back
        for cookie in &mut cookies {
            let old = cookie.clone();
            cookie.last_accessed = Some(now);
            self.store
                .update_cookie(&old, cookie.clone())
                .map_err(Error::Store)?;
        }

        cookies.sort_by(cookie_compare);

        Ok(cookies)
    }

    /// The request `Cookie` header value for `url`: the matching cookies as
    /// `k1=v1; k2=v2; ...` in canonical send order.
    pub fn get_cookie_string(&mut self, url: &Url, options: &GetCookieOptions) -> Result<String, Error> {
        let cookies = self.get_cookies(url, options)?;
        let pairs: Vec<String> = cookies.iter().map(Cookie::cookie_string).collect();

        Ok(pairs.join("; "))
    }

    /// The matching cookies for `url`, each in full `Set-Cookie` syntax.
    pub fn get_set_cookie_strings(
        &mut self,
        url: &Url,
        options: &GetCookieOptions,
    ) -> Result<Vec<String>, Error> {
        let cookies = self.get_cookies(url, options)?;

        Ok(cookies.iter().map(Cookie::to_string).collect())
    }

    /// Drops every cookie in the backing store.
    pub fn remove_all_cookies(&mut self) -> Result<(), Error> {
        self.store.remove_all_cookies().map_err(Error::Store)
    }

    /// Takes a snapshot of the jar: its configuration flags plus every
    /// stored cookie in JSON form, ordered by creation index. Record fields
    /// outside the serializable whitelist are not part of a snapshot.
    pub fn serialize(&self) -> Result<SerializedJar, Error> {
        let cookies = self.store.get_all_cookies().map_err(Error::Store)?;

        Ok(SerializedJar {
            version: String::from(SERIALIZED_VERSION),
            store_type: Some(String::from(self.store.store_type())),
            reject_public_suffixes: self.config.reject_public_suffixes,
            cookies: cookies.iter().map(Cookie::to_json).collect(),
        })
    }

    /// Rebuilds a jar from a snapshot, inserting cookies into `store` in
    /// array order. A record that no longer parses is skipped with a
    /// warning; a snapshot cannot corrupt the jar. The public-suffix dataset
    /// is not part of a snapshot, see [CookieJar::set_public_suffix_list].
    pub fn deserialize(serialized: &SerializedJar, store: S) -> Result<CookieJar<S>, Error> {
        let config = CookieJarConfig {
            reject_public_suffixes: serialized.reject_public_suffixes,
            ..CookieJarConfig::default()
        };
        let mut jar = CookieJar::with_store_and_config(store, config);

        for value in &serialized.cookies {
            match Cookie::from_json(value) {
                Ok(cookie) => jar.store.put_cookie(cookie).map_err(Error::Store)?,
                Err(error) => warn!("skipping malformed serialized cookie: {}", error),
            }
        }

        Ok(jar)
    }

    /// Writes [CookieJar::serialize] as JSON.
    pub fn save_json<W: io::Write>(&self, writer: &mut W) -> Result<(), Error> {
        let serialized = self.serialize()?;

        serde_json::to_writer(writer, &serialized).map_err(Error::Json)
    }

    /// A memory-backed copy of this jar, made through the serialized form.
    pub fn try_clone(&self) -> Result<CookieJar<MemoryCookieStore>, Error> {
        let serialized = self.serialize()?;

        CookieJar::deserialize(&serialized, MemoryCookieStore::new())
    }
}

/// Snapshot layout of a serialized jar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedJar {
    /// Identifier of the serialized layout.
    pub version: String,
    /// Identifier of the store the snapshot was taken from.
    pub store_type: Option<String>,
    /// Whether the jar rejected public-suffix domains.
    pub reject_public_suffixes: bool,
    /// The records, each in the cookie JSON form, ordered by creation index.
    pub cookies: Vec<Value>,
}

fn request_host(url: &Url) -> Result<String, Error> {
    let host = match url.host_str() {
        Some(host) => host,
        None => return Err(Error::Parse(ParseError::new("Request URL has no host"))),
    };

    Ok(canonical_domain(host)?)
}

fn is_secure_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "https" | "wss")
}
