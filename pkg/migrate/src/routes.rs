//! Builds IngressRoute route entries from legacy Ingress rules.

use pkg_constants::traefik::{DEFAULT_ROUTE_PRIORITY, RULE_KIND, SERVICE_KIND};
use pkg_types::ingress::{IngressBackend, IngressRule};
use pkg_types::ingressroute::{MiddlewareRef, PortValue, Route, ServiceRef};

use crate::matcher::build_match;
use crate::middleware::middleware_name;

/// Resolve a legacy backend into a normalized service reference.
///
/// The reference is all-or-nothing: it exists only when the manifest carries
/// the full `backend.service.port` chain. Name and port values pass through
/// unvalidated; a numeric port wins over a named one.
pub fn service_ref(backend: Option<&IngressBackend>, namespace: &str) -> Option<ServiceRef> {
    let service = backend?.service.as_ref()?;
    let port = service.port.as_ref()?;
    let port_value = match (port.number, &port.name) {
        (Some(number), _) => Some(PortValue::Number(number)),
        (None, Some(name)) => Some(PortValue::Name(name.clone())),
        (None, None) => None,
    };
    Some(ServiceRef {
        kind: SERVICE_KIND.to_string(),
        name: service.name.clone(),
        namespace: namespace.to_string(),
        port: port_value,
    })
}

/// Build one route per (rule, path) pair of a legacy resource.
///
/// Rules without an `http` block contribute zero routes. Route order follows
/// rule order, then path order. Every route gets the fixed default priority;
/// a strip-prefix middleware reference is attached only when the match
/// expression routes on a non-root prefix.
pub fn build_routes(
    name: &str,
    namespace: &str,
    rules: &[IngressRule],
    middleware_namespace: &str,
) -> Vec<Route> {
    let mut routes = Vec::new();
    for rule in rules {
        let Some(http) = &rule.http else { continue };
        for path in &http.paths {
            let (match_expr, needs_strip) =
                build_match(rule.host.as_deref(), path.path.as_deref());
            let middlewares = needs_strip.then(|| {
                vec![MiddlewareRef {
                    name: middleware_name(name),
                    namespace: middleware_namespace.to_string(),
                }]
            });
            routes.push(Route {
                kind: RULE_KIND.to_string(),
                match_expr: Some(match_expr),
                middlewares,
                priority: DEFAULT_ROUTE_PRIORITY,
                services: service_ref(path.backend.as_ref(), namespace).map(|s| vec![s]),
            });
        }
    }
    routes
}
