use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::TimeZone;
use chrono::Utc;
use regex::Regex;
use serde_json::Map;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering as AtomicOrdering;

use crate::ParseError;
use crate::cookie_date::parse_cookie_date;
use crate::COOKIE_DOMAIN;
use crate::COOKIE_EXPIRES;
use crate::COOKIE_HTTP_ONLY;
use crate::COOKIE_MAX_AGE;
use crate::COOKIE_PATH;
use crate::COOKIE_SECURE;

// Max-Age values must be plain decimal integers, RFC6265 Section 5.2.2
const MAX_AGE_DIGITS: &str = "^-?[0-9]+$";

// Control octets are never legal in a cookie name or value
const CONTROL_CHARS: &str = "[\\x00-\\x1f]";

// 2038-01-19T03:14:07Z, the stand-in instant for a cookie that never expires
const EXPIRY_CLAMP_MILLIS: i64 = 2_147_483_647_000;

/// Process-wide source of creation indexes: initialized at load, increases
/// monotonically and is never reset. Stores shared between processes are
/// expected to substitute a logical clock of their own.
static COOKIE_INDEX: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_cookie_index() -> u64 {
    COOKIE_INDEX.fetch_add(1, AtomicOrdering::Relaxed)
}

/// Fields exported by [Cookie::to_json] and read back by [Cookie::from_json],
/// in emission order.
///
/// The serializer walks this list, so the serialized form of a cookie is
/// exactly these fields and nothing else; unknown properties in stored data
/// are dropped on the floor. `creationIndex` is deliberately not part of the
/// list: it is per-process state and a fresh index is drawn whenever a cookie
/// is revived from its JSON form.
pub const SERIALIZABLE_PROPERTIES: &[&str] = &[
    "key",
    "value",
    "expires",
    "maxAge",
    "domain",
    "path",
    "secure",
    "httpOnly",
    "extensions",
    "hostOnly",
    "pathIsDefault",
    "creation",
    "lastAccessed",
];

/// When a cookie stops being valid, from the `Expires` attribute.
///
/// Serialized as an ISO-8601 instant, or the literal token `"Infinity"` for a
/// cookie that never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expires {
    /// Expires at a concrete instant.
    At(DateTime<Utc>),
    /// Never expires.
    Never,
}

impl Default for Expires {
    fn default() -> Expires {
        Expires::Never
    }
}

/// Value of the `Max-Age` attribute.
///
/// The three states are kept distinct rather than folded into a float: a
/// finite number of seconds, and the two sentinels that serialize as the
/// literal tokens `"Infinity"` and `"-Infinity"` in JSON form. The sentinels
/// never appear in header form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxAge {
    /// A finite number of seconds. Zero and negative values are preserved;
    /// expiry arithmetic treats them as already expired.
    Seconds(i64),
    /// Never expires.
    Infinity,
    /// Already expired.
    NegInfinity,
}

/// Whether a cookie is bound to the exact host that set it.
///
/// A freshly parsed cookie carries `Unknown`; a jar resolves the state when
/// it accepts the cookie. Serialized as `null` / `true` / `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOnly {
    /// Not yet resolved by a jar.
    Unknown,
    /// Accepted without a `Domain` attribute: sent only to the exact host.
    Host,
    /// Accepted with a `Domain` attribute: sent to subdomains as well.
    Domain,
}

/// Instant at which a cookie stops being valid, computed by
/// [Cookie::expiry_time] from `Max-Age` and `Expires`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryTime {
    /// The cookie never expires.
    Never,
    /// The cookie is already expired, whatever the current time.
    Past,
    /// The cookie expires at this epoch-milliseconds instant.
    AtMillis(i64),
}

/// A cookie record: the name/value pair plus the attributes of a `Set-Cookie`
/// header and the bookkeeping a jar maintains on it.
///
/// A `Cookie` can be parsed from a `Set-Cookie` header value with
/// [Cookie::parse] (or the `FromStr` impl):
///
/// ```rust
/// use cookiejar::Cookie;
/// use std::str::FromStr;
///
/// let cookie = Cookie::from_str("id=a3fWa; Max-Age=12000; Secure").unwrap();
///
/// assert_eq!(cookie.key.as_str(), "id");
/// assert!(cookie.secure);
/// ```
///
/// or constructed with [Cookie::new] and filled in through its public
/// members. The `domain`, `path`, `host_only`, `path_is_default` and
/// `last_accessed` members are normally resolved by a
/// [CookieJar](crate::CookieJar) when the cookie is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    /// Cookie name. May be empty for a nameless `value`-only cookie accepted
    /// in loose mode.
    pub key: String,
    /// Cookie value, kept verbatim. No quote stripping is performed.
    pub value: String,
    /// When the cookie expires.
    pub expires: Expires,
    /// The `Max-Age` attribute. Takes precedence over `expires` in expiry
    /// arithmetic; both remain stored.
    pub max_age: Option<MaxAge>,
    /// The `Domain` attribute as received (dot-stripped, lowercased), or the
    /// canonical host once a jar resolves the cookie.
    pub domain: Option<String>,
    /// The `Path` attribute. When a jar stores the cookie this always begins
    /// with `/`.
    pub path: Option<String>,
    /// Only send over secure channels.
    pub secure: bool,
    /// Only expose through HTTP APIs (not to scripts).
    pub http_only: bool,
    /// Unrecognized attributes, verbatim, in order of appearance.
    pub extensions: Vec<String>,
    /// Resolved domain scope, see [HostOnly].
    pub host_only: HostOnly,
    /// True when the jar supplied `path` from the request's default path.
    pub path_is_default: bool,
    /// Instant the record was created. Preserved from the replaced record
    /// when a jar overwrites a cookie at the same (domain, path, key).
    pub creation: DateTime<Utc>,
    /// Instant of the last retrieval through a jar.
    pub last_accessed: Option<DateTime<Utc>>,
    /// Process-wide monotonic tie-breaker for creation instants.
    creation_index: u64,
}

impl Cookie {
    /// Constructor with the mandatory `key` and `value`. The creation instant
    /// and creation index are assigned here and the scope fields start
    /// unresolved.
    pub fn new<S>(key: S, value: S) -> Cookie
    where
        S: Into<String>,
    {
        Cookie {
            key: key.into(),
            value: value.into(),
            expires: Expires::Never,
            max_age: None,
            domain: None,
            path: None,
            secure: false,
            http_only: false,
            extensions: Vec::new(),
            host_only: HostOnly::Unknown,
            path_is_default: false,
            creation: Utc::now(),
            last_accessed: None,
            creation_index: next_cookie_index(),
        }
    }

    /// The process-wide monotonic index assigned at construction. Unique for
    /// the lifetime of the process, which makes [cookie_compare] a total
    /// order.
    pub fn creation_index(&self) -> u64 {
        self.creation_index
    }

    /// Parses a `Set-Cookie` header value, as defined in
    /// [RFC6265 Section 5.2](https://datatracker.ietf.org/doc/html/rfc6265#section-5.2).
    ///
    /// Unknown attributes are not an error; they are collected verbatim into
    /// [extensions](Cookie::extensions). A malformed `Expires` or `Max-Age`
    /// value is ignored and the attribute left unset. A `Path` value that
    /// does not begin with `/` leaves the path unset so that a jar will
    /// substitute the request's default path.
    pub fn parse(header: &str) -> Result<Cookie, ParseError> {
        Cookie::parse_impl(header, false)
    }

    /// Like [Cookie::parse], but additionally accepts a nameless cookie: a
    /// pair with no `=`, or with nothing before it, becomes a cookie with an
    /// empty key and the rest as its value.
    pub fn parse_loose(header: &str) -> Result<Cookie, ParseError> {
        Cookie::parse_impl(header, true)
    }

    fn parse_impl(header: &str, loose: bool) -> Result<Cookie, ParseError> {
        let header = header.trim();

        let (pair, attributes) = match header.find(';') {
            Some(index) => (&header[..index], &header[index + 1..]),
            None => (header, ""),
        };

        if pair.trim().is_empty() {
            return Err(ParseError::new("Cookie has not got name/value"));
        }

        let (key, value) = parse_cookie_pair(pair, loose)?;
        let mut cookie = Cookie::new(key, value);

        for attribute in attributes.split(';') {
            let attribute = attribute.trim();
            if attribute.is_empty() {
                continue;
            }

            let (name, value) = match attribute.find('=') {
                Some(index) => (attribute[..index].trim(), Some(attribute[index + 1..].trim())),
                None => (attribute, None),
            };

            // Attribute names are case-insensitive; the last occurrence wins
            match name.to_ascii_lowercase().as_str() {
                COOKIE_EXPIRES => {
                    if let Some(value) = value {
                        // A date the grammar rejects leaves any earlier value
                        if let Ok(instant) = parse_cookie_date(value) {
                            cookie.expires = Expires::At(instant);
                        }
                    }
                }
                COOKIE_MAX_AGE => {
                    if let Some(value) = value {
                        lazy_static! {
                            static ref DIGITS: Regex = Regex::new(MAX_AGE_DIGITS).unwrap();
                        }
                        if DIGITS.is_match(value) {
                            cookie.max_age = Some(parse_max_age(value));
                        }
                    }
                }
                COOKIE_DOMAIN => {
                    if let Some(value) = value {
                        let stripped = value.strip_prefix('.').unwrap_or(value);
                        if !stripped.is_empty() {
                            cookie.domain = Some(stripped.to_ascii_lowercase());
                        }
                    }
                }
                COOKIE_PATH => {
                    cookie.path = match value {
                        Some(value) if value.starts_with('/') => Some(value.to_string()),
                        _ => None,
                    };
                }
                COOKIE_SECURE => cookie.secure = true,
                COOKIE_HTTP_ONLY => cookie.http_only = true,
                _ => cookie.extensions.push(attribute.to_string()),
            }
        }

        Ok(cookie)
    }

    /// Writes the cookie with format `name=value`, the form it takes inside
    /// a request `Cookie` header. A nameless cookie is just its value.
    pub fn cookie_string(&self) -> String {
        if self.key.is_empty() {
            self.value.clone()
        } else {
            format!("{}={}", self.key, self.value)
        }
    }

    /// Computes the instant at which the cookie stops being valid.
    ///
    /// `Max-Age` takes precedence over `Expires`: a finite positive value
    /// yields `creation + seconds`, independent of the current time; zero
    /// and negative values mean the cookie was born expired. With neither
    /// attribute the cookie lives for the session and never expires on its
    /// own. Arithmetic that overflows clamps to the matching sentinel.
    pub fn expiry_time(&self) -> ExpiryTime {
        if let Some(max_age) = self.max_age {
            return match max_age {
                MaxAge::Seconds(seconds) if seconds <= 0 => ExpiryTime::Past,
                MaxAge::Seconds(seconds) => {
                    let expiry = seconds
                        .checked_mul(1000)
                        .and_then(|millis| self.creation.timestamp_millis().checked_add(millis));
                    match expiry {
                        Some(instant) => ExpiryTime::AtMillis(instant),
                        None => ExpiryTime::Never,
                    }
                }
                MaxAge::Infinity => ExpiryTime::Never,
                MaxAge::NegInfinity => ExpiryTime::Past,
            };
        }

        match self.expires {
            Expires::At(instant) => ExpiryTime::AtMillis(instant.timestamp_millis()),
            Expires::Never => ExpiryTime::Never,
        }
    }

    /// [Cookie::expiry_time] as a concrete instant: a cookie that never
    /// expires reports `2038-01-19T03:14:07Z` and one already expired
    /// reports the epoch.
    pub fn expiry_date(&self) -> DateTime<Utc> {
        let millis = match self.expiry_time() {
            ExpiryTime::Never => EXPIRY_CLAMP_MILLIS,
            ExpiryTime::Past => 0,
            ExpiryTime::AtMillis(instant) => instant.clamp(0, EXPIRY_CLAMP_MILLIS),
        };

        // The clamp keeps the value inside the representable range
        Utc.timestamp_millis_opt(millis).single().unwrap_or_else(Utc::now)
    }

    /// Checks if the cookie is expired at `now`.
    pub fn expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiry_time() {
            ExpiryTime::Never => false,
            ExpiryTime::Past => true,
            ExpiryTime::AtMillis(instant) => instant <= now.timestamp_millis(),
        }
    }

    /// Remaining lifetime in milliseconds at `now`: `None` when the cookie
    /// never expires, `Some(0)` when it already has.
    pub fn ttl(&self, now: DateTime<Utc>) -> Option<i64> {
        match self.expiry_time() {
            ExpiryTime::Never => None,
            ExpiryTime::Past => Some(0),
            ExpiryTime::AtMillis(instant) => {
                Some((instant - now.timestamp_millis()).max(0))
            }
        }
    }

    /// Checks structural validity: `path`, when present, begins with `/` and
    /// `domain`, when present, is non-empty. The expiry fields are valid by
    /// construction.
    pub fn validate(&self) -> bool {
        if let Some(ref path) = self.path {
            if !path.starts_with('/') {
                return false;
            }
        }

        if let Some(ref domain) = self.domain {
            if domain.is_empty() {
                return false;
            }
        }

        true
    }

    /// Exports the cookie as a JSON object holding exactly the
    /// [SERIALIZABLE_PROPERTIES] fields, with instants as ISO-8601 strings
    /// and the `Max-Age`/`Expires` sentinels as their literal tokens.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();

        for property in SERIALIZABLE_PROPERTIES {
            match *property {
                "key" => {
                    object.insert("key".to_string(), Value::from(self.key.as_str()));
                }
                "value" => {
                    object.insert("value".to_string(), Value::from(self.value.as_str()));
                }
                "expires" => {
                    let value = match self.expires {
                        Expires::At(instant) => Value::from(format_instant(instant)),
                        Expires::Never => Value::from("Infinity"),
                    };
                    object.insert("expires".to_string(), value);
                }
                "maxAge" => {
                    if let Some(max_age) = self.max_age {
                        let value = match max_age {
                            MaxAge::Seconds(seconds) => Value::from(seconds),
                            MaxAge::Infinity => Value::from("Infinity"),
                            MaxAge::NegInfinity => Value::from("-Infinity"),
                        };
                        object.insert("maxAge".to_string(), value);
                    }
                }
                "domain" => {
                    if let Some(ref domain) = self.domain {
                        object.insert("domain".to_string(), Value::from(domain.as_str()));
                    }
                }
                "path" => {
                    if let Some(ref path) = self.path {
                        object.insert("path".to_string(), Value::from(path.as_str()));
                    }
                }
                "secure" => {
                    object.insert("secure".to_string(), Value::from(self.secure));
                }
                "httpOnly" => {
                    object.insert("httpOnly".to_string(), Value::from(self.http_only));
                }
                "extensions" => {
                    if !self.extensions.is_empty() {
                        let values: Vec<Value> = self
                            .extensions
                            .iter()
                            .map(|extension| Value::from(extension.as_str()))
                            .collect();
                        object.insert("extensions".to_string(), Value::from(values));
                    }
                }
                "hostOnly" => {
                    match self.host_only {
                        HostOnly::Unknown => {}
                        HostOnly::Host => {
                            object.insert("hostOnly".to_string(), Value::from(true));
                        }
                        HostOnly::Domain => {
                            object.insert("hostOnly".to_string(), Value::from(false));
                        }
                    };
                }
                "pathIsDefault" => {
                    if self.path_is_default {
                        object.insert("pathIsDefault".to_string(), Value::from(true));
                    }
                }
                "creation" => {
                    object.insert("creation".to_string(), Value::from(format_instant(self.creation)));
                }
                "lastAccessed" => {
                    if let Some(instant) = self.last_accessed {
                        object.insert("lastAccessed".to_string(), Value::from(format_instant(instant)));
                    }
                }
                _ => {}
            }
        }

        Value::Object(object)
    }

    /// Revives a cookie from its [Cookie::to_json] form. Fields outside
    /// [SERIALIZABLE_PROPERTIES] are ignored; a fresh creation index is
    /// assigned.
    ///
    /// Instants are read back with general-purpose date parsers (ISO-8601,
    /// falling back to RFC 2822), never with the lenient cookie-date grammar:
    /// this side of the round trip only ever carries our own output.
    pub fn from_json(value: &Value) -> Result<Cookie, ParseError> {
        let object = match value.as_object() {
            Some(object) => object,
            None => return Err(ParseError::new("Serialized cookie must be an object")),
        };

        let mut cookie = Cookie::new("", "");

        for property in SERIALIZABLE_PROPERTIES {
            let field = match object.get(*property) {
                Some(field) if !field.is_null() => field,
                _ => continue,
            };

            match *property {
                "key" => cookie.key = string_field(field, "key")?,
                "value" => cookie.value = string_field(field, "value")?,
                "expires" => {
                    let text = string_field(field, "expires")?;
                    cookie.expires = if text == "Infinity" {
                        Expires::Never
                    } else {
                        Expires::At(parse_serialized_date(&text)?)
                    };
                }
                "maxAge" => cookie.max_age = Some(max_age_field(field)?),
                "domain" => cookie.domain = Some(string_field(field, "domain")?),
                "path" => cookie.path = Some(string_field(field, "path")?),
                "secure" => cookie.secure = bool_field(field, "secure")?,
                "httpOnly" => cookie.http_only = bool_field(field, "httpOnly")?,
                "extensions" => {
                    let values = match field.as_array() {
                        Some(values) => values,
                        None => return Err(ParseError::new("Serialized extensions must be an array")),
                    };
                    cookie.extensions = values
                        .iter()
                        .map(|value| string_field(value, "extensions"))
                        .collect::<Result<Vec<String>, ParseError>>()?;
                }
                "hostOnly" => {
                    cookie.host_only = if bool_field(field, "hostOnly")? {
                        HostOnly::Host
                    } else {
                        HostOnly::Domain
                    };
                }
                "pathIsDefault" => cookie.path_is_default = bool_field(field, "pathIsDefault")?,
                "creation" => {
                    let text = string_field(field, "creation")?;
                    cookie.creation = parse_serialized_date(&text)?;
                }
                "lastAccessed" => {
                    let text = string_field(field, "lastAccessed")?;
                    cookie.last_accessed = Some(parse_serialized_date(&text)?);
                }
                _ => {}
            }
        }

        Ok(cookie)
    }
}

impl FromStr for Cookie {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Cookie, ParseError> {
        Cookie::parse(s)
    }
}

impl Display for Cookie {
    /// Writes the cookie in `Set-Cookie` syntax. `Expires` is formatted as
    /// an RFC 1123 date and omitted for a cookie that never expires; the
    /// `Max-Age` sentinels are omitted as well, they exist only in the JSON
    /// form. `Domain` is omitted for a host-only cookie.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cookie_string())?;

        if let Expires::At(instant) = self.expires {
            write!(f, "; Expires={}", instant.format("%a, %d %b %Y %H:%M:%S GMT"))?;
        }

        if let Some(MaxAge::Seconds(seconds)) = self.max_age {
            write!(f, "; Max-Age={}", seconds)?;
        }

        // A host-only cookie's domain is jar bookkeeping, not an attribute
        // it was set with
        if let Some(ref domain) = self.domain {
            if self.host_only != HostOnly::Host {
                write!(f, "; Domain={}", domain)?;
            }
        }

        if let Some(ref path) = self.path {
            write!(f, "; Path={}", path)?;
        }

        if self.secure {
            write!(f, "; Secure")?;
        }

        if self.http_only {
            write!(f, "; HttpOnly")?;
        }

        for extension in &self.extensions {
            write!(f, "; {}", extension)?;
        }

        Ok(())
    }
}

/// Canonical send-order comparator: longer paths sort first, then earlier
/// creation instants, then lower creation indexes.
///
/// Creation instants compare at millisecond resolution; the creation index
/// breaks ties below that, so the order is total for cookies created in the
/// same process.
pub fn cookie_compare(a: &Cookie, b: &Cookie) -> Ordering {
    let a_path = a.path.as_deref().unwrap_or("");
    let b_path = b.path.as_deref().unwrap_or("");

    b_path
        .len()
        .cmp(&a_path.len())
        .then_with(|| {
            a.creation
                .timestamp_millis()
                .cmp(&b.creation.timestamp_millis())
        })
        .then_with(|| a.creation_index.cmp(&b.creation_index))
}

/// Parses a request `Cookie` header value, as defined in
/// [RFC6265 Section 4.2.1](https://datatracker.ietf.org/doc/html/rfc6265#section-4.2.1):
/// a `;`-delimited list of `name=value` pairs. Empty list members are
/// skipped.
pub fn parse_cookie_header(header: &str) -> Result<Vec<Cookie>, ParseError> {
    let mut cookies = Vec::new();

    for pair in header.split(';') {
        if pair.trim().is_empty() {
            continue;
        }

        let (key, value) = parse_cookie_pair(pair, false)?;
        cookies.push(Cookie::new(key, value));
    }

    Ok(cookies)
}

/// Splits the cookie-pair before the first `;` of a header into name and
/// value. In loose mode a pair without `=`, or with nothing before it, is
/// accepted as a nameless cookie.
fn parse_cookie_pair(pair: &str, loose: bool) -> Result<(String, String), ParseError> {
    lazy_static! {
        static ref CONTROL: Regex = Regex::new(CONTROL_CHARS).unwrap();
    }

    let mut pair = pair.trim();
    let mut separator = pair.find('=');

    if loose {
        if separator == Some(0) {
            // Drop a leading `=` and look again
            pair = &pair[1..];
            separator = pair.find('=');
        }
    } else if separator.is_none() || separator == Some(0) {
        return Err(ParseError::new(format!("Malformed HTTP cookie: {}", pair)));
    }

    let (key, value) = match separator {
        Some(index) => (pair[..index].trim(), pair[index + 1..].trim()),
        None => ("", pair),
    };

    if CONTROL.is_match(key) || CONTROL.is_match(value) {
        return Err(ParseError::new("Cookie name or value holds control characters"));
    }

    Ok((key.to_string(), value.to_string()))
}

fn parse_max_age(value: &str) -> MaxAge {
    match value.parse::<i64>() {
        Ok(seconds) => MaxAge::Seconds(seconds),
        // The digit grammar already matched, so this is overflow: clamp to
        // the sentinel of the matching sign
        Err(_) => {
            if value.starts_with('-') {
                MaxAge::NegInfinity
            } else {
                MaxAge::Infinity
            }
        }
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_serialized_date(value: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    DateTime::parse_from_rfc2822(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| ParseError::new(format!("Invalid serialized date: {}", value)))
}

fn string_field(value: &Value, name: &str) -> Result<String, ParseError> {
    value
        .as_str()
        .map(String::from)
        .ok_or_else(|| ParseError::new(format!("Serialized {} must be a string", name)))
}

fn bool_field(value: &Value, name: &str) -> Result<bool, ParseError> {
    value
        .as_bool()
        .ok_or_else(|| ParseError::new(format!("Serialized {} must be a boolean", name)))
}

fn max_age_field(value: &Value) -> Result<MaxAge, ParseError> {
    if let Some(seconds) = value.as_i64() {
        return Ok(MaxAge::Seconds(seconds));
    }

    if let Some(float) = value.as_f64() {
        // A numeric value outside the integer range clamps by sign
        return Ok(if float < 0.0 {
            MaxAge::NegInfinity
        } else {
            MaxAge::Infinity
        });
    }

    match value.as_str() {
        Some("Infinity") => Ok(MaxAge::Infinity),
        Some("-Infinity") => Ok(MaxAge::NegInfinity),
        _ => Err(ParseError::new("Serialized maxAge must be a number or a sentinel token")),
    }
}
