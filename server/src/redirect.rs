use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header::LOCATION},
    middleware::Next,
};

/// Canonical spelling of `path`, or `None` when it is already canonical.
///
/// Trailing slashes are dropped and leading runs of `/` or `\` collapse to a
/// single `/`, so the result is always a same-origin path. The root stays `/`.
pub fn canonical_path(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let body = path
        .trim_start_matches(['/', '\\'])
        .trim_end_matches('/');
    let canonical = format!("/{body}");
    (canonical != path).then_some(canonical)
}

/// Permanently redirects `/works/` to `/works` (query preserved) so the
/// header's exact route match sees one spelling per page.
pub async fn redirect_trailing_slash(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let location = canonical_path(req.uri().path()).map(|path| match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    });

    match location {
        Some(location) => {
            tracing::debug!(from = %req.uri(), to = %location, "redirecting to canonical path");
            Response::builder()
                .status(StatusCode::MOVED_PERMANENTLY)
                .header(LOCATION, location)
                .body(Body::empty())
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
        }
        None => Ok(next.run(req).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_are_left_alone() {
        assert_eq!(canonical_path("/"), None);
        assert_eq!(canonical_path("/works"), None);
        assert_eq!(canonical_path("/works/rust"), None);
        assert_eq!(canonical_path(""), None);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(canonical_path("/works/").as_deref(), Some("/works"));
        assert_eq!(canonical_path("/works//").as_deref(), Some("/works"));
        assert_eq!(canonical_path("/works/rust/").as_deref(), Some("/works/rust"));
        assert_eq!(canonical_path("//").as_deref(), Some("/"));
    }

    #[test]
    fn redirect_target_never_leaves_the_site() {
        assert_eq!(canonical_path("//evil.example/").as_deref(), Some("/evil.example"));
        assert_eq!(canonical_path("//evil.example").as_deref(), Some("/evil.example"));
        assert_eq!(canonical_path("/\\evil.example/").as_deref(), Some("/evil.example"));
        assert_eq!(canonical_path("///evil.example").as_deref(), Some("/evil.example"));
    }
}
