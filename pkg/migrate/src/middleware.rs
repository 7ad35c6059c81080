//! Builds per-resource strip-prefix Middleware documents.

use pkg_constants::traefik::{MIDDLEWARE_KIND, MIDDLEWARE_NAME_SUFFIX, TRAEFIK_API_VERSION};
use pkg_types::ingress::IngressRule;
use pkg_types::ingressroute::{MiddlewareDoc, MiddlewareSpec, ObjectMeta, StripPrefix};

/// Name of the strip-prefix middleware derived for a legacy resource.
pub fn middleware_name(resource: &str) -> String {
    format!("{}{}", resource, MIDDLEWARE_NAME_SUFFIX)
}

/// Collect every non-root path across a resource's rules into one
/// strip-prefix middleware, preserving encounter order.
///
/// Root paths need no stripping, and a paths entry may omit `path` entirely
/// — both are skipped. Returns `None` when nothing is left to strip.
pub fn build_middleware(
    name: &str,
    rules: &[IngressRule],
    middleware_namespace: &str,
) -> Option<MiddlewareDoc> {
    let mut prefixes = Vec::new();
    for rule in rules {
        let Some(http) = &rule.http else { continue };
        for path in &http.paths {
            if let Some(prefix) = &path.path
                && prefix != "/"
            {
                prefixes.push(prefix.clone());
            }
        }
    }
    if prefixes.is_empty() {
        return None;
    }
    Some(MiddlewareDoc {
        api_version: TRAEFIK_API_VERSION.to_string(),
        kind: MIDDLEWARE_KIND.to_string(),
        metadata: ObjectMeta {
            name: middleware_name(name),
            namespace: middleware_namespace.to_string(),
        },
        spec: MiddlewareSpec {
            strip_prefix: StripPrefix { prefixes },
        },
    })
}
