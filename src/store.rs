use std::collections::HashMap;

use crate::Cookie;
use crate::domain::domain_match_canonical;
use crate::path::path_match;

/// Error type a store operation may surface. Stores are free to fail with
/// whatever error fits their backend; the jar wraps it and never swallows it.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence backend of a [CookieJar](crate::CookieJar).
///
/// A store addresses cookies by the tuple (canonical domain, path, key), with
/// at most one record per tuple. Every operation returns a [StoreResult] so
/// that both eager in-memory implementations and implementations that block
/// on real I/O fit the same contract; the jar performs its store calls
/// sequentially and assumes nothing beyond completion.
///
/// Absence is never an error: looking up or removing a cookie that is not
/// there succeeds.
pub trait CookieStore {
    /// Returns the record at exactly (domain, path, key), if any.
    fn find_cookie(&self, domain: &str, path: &str, key: &str) -> StoreResult<Option<Cookie>>;

    /// Returns every record whose domain domain-matches `domain` and, when
    /// `path` is given, whose path path-matches it. Implementations may
    /// over-return; the jar re-filters.
    fn find_cookies(&self, domain: &str, path: Option<&str>) -> StoreResult<Vec<Cookie>>;

    /// Inserts `cookie`, replacing any record with the same
    /// (domain, path, key).
    fn put_cookie(&mut self, cookie: Cookie) -> StoreResult<()>;

    /// Replaces `old` with `new_cookie`. Semantically identical to
    /// [put_cookie](CookieStore::put_cookie); a store that can update a value
    /// in place is free to use `old` to do less work.
    fn update_cookie(&mut self, old: &Cookie, new_cookie: Cookie) -> StoreResult<()>;

    /// Removes the record at (domain, path, key). Idempotent.
    fn remove_cookie(&mut self, domain: &str, path: &str, key: &str) -> StoreResult<()>;

    /// Removes every record under `domain`, or only those at `path` within
    /// it when a path is given.
    fn remove_cookies(&mut self, domain: &str, path: Option<&str>) -> StoreResult<()>;

    /// Removes every record in the store.
    fn remove_all_cookies(&mut self) -> StoreResult<()>;

    /// Returns every record, ordered by creation index.
    fn get_all_cookies(&self) -> StoreResult<Vec<Cookie>>;

    /// Identifier recorded in serialized jars to name the backing store.
    fn store_type(&self) -> &'static str;
}

/// The reference in-memory store: a domain → path → key three-level map.
///
/// `find_cookies` scans the domain buckets with the domain-match predicate
/// rather than probing permuted keys, so it needs no public-suffix data; an
/// indexed store can instead probe the keys produced by
/// [permute_domain](crate::permute_domain) and
/// [permute_path](crate::permute_path).
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookies: HashMap<String, HashMap<String, HashMap<String, Cookie>>>,
}

impl MemoryCookieStore {
    pub fn new() -> MemoryCookieStore {
        MemoryCookieStore {
            cookies: HashMap::new(),
        }
    }
}

impl CookieStore for MemoryCookieStore {
    fn find_cookie(&self, domain: &str, path: &str, key: &str) -> StoreResult<Option<Cookie>> {
        let found = self
            .cookies
            .get(domain)
            .and_then(|paths| paths.get(path))
            .and_then(|keys| keys.get(key))
            .cloned();

        Ok(found)
    }

    fn find_cookies(&self, domain: &str, path: Option<&str>) -> StoreResult<Vec<Cookie>> {
        let mut results = Vec::new();

        if domain.is_empty() {
            return Ok(results);
        }

        for (cookie_domain, paths) in &self.cookies {
            if !domain_match_canonical(domain, cookie_domain) {
                continue;
            }

            for (cookie_path, keys) in paths {
                if let Some(path) = path {
                    if !path_match(path, cookie_path) {
                        continue;
                    }
                }

                results.extend(keys.values().cloned());
            }
        }

        Ok(results)
    }

    fn put_cookie(&mut self, cookie: Cookie) -> StoreResult<()> {
        let domain = cookie.domain.clone().unwrap_or_default();
        let path = cookie.path.clone().unwrap_or_default();
        let key = cookie.key.clone();

        self.cookies
            .entry(domain)
            .or_default()
            .entry(path)
            .or_default()
            .insert(key, cookie);

        Ok(())
    }

    fn update_cookie(&mut self, _old: &Cookie, new_cookie: Cookie) -> StoreResult<()> {
        self.put_cookie(new_cookie)
    }

    fn remove_cookie(&mut self, domain: &str, path: &str, key: &str) -> StoreResult<()> {
        if let Some(paths) = self.cookies.get_mut(domain) {
            if let Some(keys) = paths.get_mut(path) {
                keys.remove(key);
            }
        }

        Ok(())
    }

    fn remove_cookies(&mut self, domain: &str, path: Option<&str>) -> StoreResult<()> {
        match path {
            Some(path) => {
                if let Some(paths) = self.cookies.get_mut(domain) {
                    paths.remove(path);
                }
            }
            None => {
                self.cookies.remove(domain);
            }
        }

        Ok(())
    }

    fn remove_all_cookies(&mut self) -> StoreResult<()> {
        self.cookies.clear();
        Ok(())
    }

    fn get_all_cookies(&self) -> StoreResult<Vec<Cookie>> {
        let mut cookies: Vec<Cookie> = self
            .cookies
            .values()
            .flat_map(|paths| paths.values())
            .flat_map(|keys| keys.values())
            .cloned()
            .collect();

        cookies.sort_by_key(Cookie::creation_index);

        Ok(cookies)
    }

    fn store_type(&self) -> &'static str {
        "MemoryCookieStore"
    }
}
