/// Computes the default path of a request path, as defined in
/// [RFC6265 Section 5.1.4](https://datatracker.ietf.org/doc/html/rfc6265#section-5.1.4).
///
/// This is the path a cookie inherits when its `Path` attribute is missing:
/// the directory portion of the request path, or `/` when the request path is
/// empty, relative or root-level.
pub fn default_path(request_path: &str) -> &str {
    if !request_path.starts_with('/') {
        return "/";
    }

    match request_path.rfind('/') {
        Some(0) | None => "/",
        Some(index) => &request_path[..index],
    }
}

/// Checks if `request_path` path-matches `cookie_path`, as defined in
/// [RFC6265 Section 5.1.4](https://datatracker.ietf.org/doc/html/rfc6265#section-5.1.4).
pub fn path_match(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }

    request_path.starts_with(cookie_path)
        && (cookie_path.ends_with('/') || request_path[cookie_path.len()..].starts_with('/'))
}

/// Produces `path` and each of its ancestor paths, trimming one `/`-separated
/// segment at a time. The result always ends with `/`.
pub fn permute_path(path: &str) -> Vec<String> {
    if path.is_empty() || path == "/" {
        return vec![String::from("/")];
    }

    let mut path = path.strip_suffix('/').unwrap_or(path);
    let mut permutations = vec![path.to_string()];

    while path.len() > 1 {
        match path.rfind('/') {
            Some(0) | None => break,
            Some(index) => {
                path = &path[..index];
                permutations.push(path.to_string());
            }
        }
    }

    permutations.push(String::from("/"));
    permutations
}
