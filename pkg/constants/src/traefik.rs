//! Traefik resource constants.

/// API group/version stamped on every generated custom resource.
pub const TRAEFIK_API_VERSION: &str = "traefik.containo.us/v1alpha1";

/// `kind` of the consolidated route document.
pub const INGRESSROUTE_KIND: &str = "IngressRoute";

/// `kind` of a strip-prefix middleware document.
pub const MIDDLEWARE_KIND: &str = "Middleware";

/// `kind` of a route entry inside an IngressRoute spec.
pub const RULE_KIND: &str = "Rule";

/// `kind` of a backend service reference.
pub const SERVICE_KIND: &str = "Service";

/// Name of the consolidated fallback IngressRoute.
pub const FALLBACK_INGRESSROUTE_NAME: &str = "traefik-v1-fallback";

/// Entry point every generated route is bound to.
pub const DEFAULT_ENTRY_POINT: &str = "web";

/// Priority attached to every generated route.
pub const DEFAULT_ROUTE_PRIORITY: i64 = 2;

/// Suffix appended to an Ingress name to form its middleware name.
pub const MIDDLEWARE_NAME_SUFFIX: &str = "-mw";

// ─── Namespaces ───────────────────────────────────────────────────────────

/// Namespace assumed when a manifest omits `metadata.namespace`.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default namespace for the consolidated IngressRoute.
pub const DEFAULT_FALLBACK_NAMESPACE: &str = "kube-system";

/// Default namespace for generated middlewares and middleware references.
pub const DEFAULT_MIDDLEWARE_NAMESPACE: &str = "traefik-middleware";
