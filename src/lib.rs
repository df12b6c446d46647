// Copyright 2026 the cookiejar authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # HTTP cookies and a cookie jar in Rust
//!
//! Implementation of [RFC 6265](https://datatracker.ietf.org/doc/html/rfc6265)
//! for HTTP clients: parsing `Set-Cookie` headers, the domain and path
//! scoping rules, expiry arithmetic, and a persistent [CookieJar] that
//! carries cookies across the requests of a session.
//!
//! # Tutorial
//!
//! ## Receiving `Set-Cookie` headers
//!
//! Servers may include one or more `Set-Cookie` headers in HTTP responses,
//! for example:
//!
//! `Set-Cookie: id=1213342`
//!
//! `Set-Cookie: user=john; Expires=Thu, 31 Oct 2041 07:28:00 GMT; Secure`
//!
//! The type [Cookie] represents one such cookie. It can be parsed from a
//! header value with [Cookie::parse] or the `FromStr` trait:
//!
//! ```rust
//! use cookiejar::Cookie;
//! use std::str::FromStr;
//!
//! let cookie = Cookie::from_str("user=john; Expires=Thu, 31 Oct 2041 07:28:00 GMT; Secure");
//!
//! assert!(cookie.is_ok());
//! ```
//!
//! ## Keeping a session with a jar
//!
//! A [CookieJar] stores the cookies a session receives and answers request
//! URLs with the matching ones, applying the scoping rules of RFC 6265
//! Section 5 (domain-match, path-match, Secure and HttpOnly gating, expiry):
//!
//! ```rust
//! use cookiejar::CookieJar;
//! use cookiejar::GetCookieOptions;
//! use cookiejar::SetCookieOptions;
//! use url::Url;
//!
//! let mut jar = CookieJar::new();
//! let url = Url::parse("https://www.example.com/app/login").unwrap();
//!
//! jar.set_cookie_str(
//!     "sid=31d4d96e407aad42; Path=/app; Secure",
//!     &url,
//!     &SetCookieOptions::default(),
//! )
//! .unwrap();
//!
//! let header = jar
//!     .get_cookie_string(&url, &GetCookieOptions::default())
//!     .unwrap();
//!
//! assert_eq!(header, "sid=31d4d96e407aad42");
//! ```
//!
//! ## Persisting a session
//!
//! A jar can be written out as JSON and revived later; see
//! [CookieJar::save_json] and [CookieJar::load_json]:
//!
//! ```rust
//! use cookiejar::CookieJar;
//! use cookiejar::CookieStore;
//! use cookiejar::SetCookieOptions;
//! use url::Url;
//!
//! let mut jar = CookieJar::new();
//! let url = Url::parse("http://example.com/").unwrap();
//!
//! jar.set_cookie_str("id=1213342", &url, &SetCookieOptions::default())
//!     .unwrap();
//!
//! let mut buffer = Vec::new();
//! jar.save_json(&mut buffer).unwrap();
//!
//! let restored = CookieJar::load_json(buffer.as_slice()).unwrap();
//! assert_eq!(restored.store().get_all_cookies().unwrap().len(), 1);
//! ```
//!
//! ## Public suffixes
//!
//! A cookie scoped to a domain like `co.uk` would reach every site under
//! that suffix. With a copy of the [public suffix
//! list](https://publicsuffix.org) supplied through [CookieJarConfig], the
//! jar rejects such cookies:
//!
//! ```rust
//! use cookiejar::CookieJar;
//! use cookiejar::CookieJarConfig;
//! use cookiejar::SetCookieOptions;
//! use url::Url;
//!
//! let list: publicsuffix::List = "// BEGIN ICANN DOMAINS\ncom\nuk\nco.uk".parse().unwrap();
//! let mut jar = CookieJar::with_config(CookieJarConfig {
//!     public_suffix_list: Some(list),
//!     ..CookieJarConfig::default()
//! });
//!
//! let url = Url::parse("http://foo.co.uk/").unwrap();
//! let result = jar.set_cookie_str("x=1; Domain=.co.uk", &url, &SetCookieOptions::default());
//!
//! assert!(result.is_err());
//! ```

#[macro_use]
extern crate lazy_static;

use std::error::Error as StdError;
use std::fmt;

mod cookie_date;
pub use cookie_date::parse_cookie_date;

mod domain;
pub use domain::canonical_domain;
pub use domain::domain_match;
pub use domain::permute_domain;

mod path;
pub use path::default_path;
pub use path::path_match;
pub use path::permute_path;

mod psl;
pub use psl::public_suffix;

mod cookie;
pub use cookie::cookie_compare;
pub use cookie::parse_cookie_header;
pub use cookie::Cookie;
pub use cookie::Expires;
pub use cookie::ExpiryTime;
pub use cookie::HostOnly;
pub use cookie::MaxAge;
pub use cookie::SERIALIZABLE_PROPERTIES;

mod store;
pub use store::CookieStore;
pub use store::MemoryCookieStore;
pub use store::StoreError;
pub use store::StoreResult;

mod jar;
pub use jar::CookieJar;
pub use jar::CookieJarConfig;
pub use jar::Error;
pub use jar::GetCookieOptions;
pub use jar::SerializedJar;
pub use jar::SetCookieOptions;

pub(crate) const COOKIE_EXPIRES: &str = "expires";
pub(crate) const COOKIE_MAX_AGE: &str = "max-age";
pub(crate) const COOKIE_DOMAIN: &str = "domain";
pub(crate) const COOKIE_PATH: &str = "path";
pub(crate) const COOKIE_SECURE: &str = "secure";
pub(crate) const COOKIE_HTTP_ONLY: &str = "httponly";

/// Error type produced while parsing a cookie, a cookie date or a serialized
/// record.
#[derive(Debug)]
pub struct ParseError {
    details: String,
}

impl ParseError {
    /// Constructor with any type of string
    pub(crate) fn new<S>(msg: S) -> ParseError
    where
        S: Into<String>,
    {
        ParseError {
            details: msg.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl StdError for ParseError {}
