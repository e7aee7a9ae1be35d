//! Route labels for request metrics.

/// Routes served by the API, used as-is for metric labels.
const KNOWN_ROUTES: [&str; 7] = [
    "/api",
    "/api/search",
    "/api/history",
    "/api/stats",
    "/metrics",
    "/api-doc/openapi.json",
    "/docs",
];

/// Metric label for `path`; anything unrouted collapses to one label.
pub(super) fn route_label(path: &str) -> &'static str {
    let trimmed = path.trim_end_matches('/');

    KNOWN_ROUTES
        .iter()
        .find(|route| **route == trimmed)
        .copied()
        .unwrap_or("unmatched")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_keep_their_path() {
        assert_eq!(route_label("/api/search"), "/api/search");
        assert_eq!(route_label("/api/"), "/api");
    }

    #[test]
    fn unknown_paths_share_a_label() {
        assert_eq!(route_label("/api/search/extra"), "unmatched");
        assert_eq!(route_label("/wp-admin"), "unmatched");
    }
}
