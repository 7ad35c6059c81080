//! Builds Traefik v2 match expressions from legacy host/path pairs.

/// Host clause for a legacy rule host. An absent host matches any domain.
fn host_clause(host: Option<&str>) -> String {
    match host {
        Some(h) => format!("Host(`{}`)", h),
        None => "HostRegexp(`{domain:.+}`)".to_string(),
    }
}

/// Build the match expression for one legacy (host, path) pair.
///
/// Returns the expression and whether the matched prefix must be stripped
/// before forwarding — `PathPrefix` routing does not strip the prefix, so
/// any prefix other than `/` needs a strip-prefix middleware. An absent
/// path yields a host-only match; the root path matches exactly and needs
/// no stripping.
pub fn build_match(host: Option<&str>, path: Option<&str>) -> (String, bool) {
    let host_match = host_clause(host);
    match path {
        None => (host_match, false),
        Some("/") => (format!("{} && Path(`/`)", host_match), false),
        Some(p) => (format!("{} && PathPrefix(`{}`)", host_match, p), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_host_and_prefix_path() {
        let (expr, strip) = build_match(Some("a.example.com"), Some("/api"));
        assert_eq!(expr, "Host(`a.example.com`) && PathPrefix(`/api`)");
        assert!(strip);
    }

    #[test]
    fn absent_host_becomes_catch_all_regexp() {
        let (expr, strip) = build_match(None, Some("/"));
        assert_eq!(expr, "HostRegexp(`{domain:.+}`) && Path(`/`)");
        assert!(!strip);
    }

    #[test]
    fn absent_path_is_host_only_match() {
        let (expr, strip) = build_match(Some("b.example.com"), None);
        assert_eq!(expr, "Host(`b.example.com`)");
        assert!(!strip);
    }

    #[test]
    fn root_path_matches_exactly_without_stripping() {
        let (expr, strip) = build_match(Some("c.example.com"), Some("/"));
        assert_eq!(expr, "Host(`c.example.com`) && Path(`/`)");
        assert!(!strip);
    }

    #[test]
    fn every_non_root_path_requires_stripping() {
        for path in ["/api", "/api/", "/a/b/c", "/x-y_z"] {
            let (expr, strip) = build_match(None, Some(path));
            assert!(strip, "expected strip for {}", path);
            assert!(expr.ends_with(&format!("PathPrefix(`{}`)", path)));
        }
    }
}
