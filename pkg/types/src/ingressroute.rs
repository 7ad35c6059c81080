use serde::{Deserialize, Serialize};

/// Name/namespace metadata of a generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

/// Service port in a reference: numeric port or named port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(i64),
    Name(String),
}

/// Normalized backend service reference inside a route.
///
/// Name and port pass through from the source manifest unvalidated; either
/// may be null when the manifest left it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub kind: String,
    pub name: Option<String>,
    pub namespace: String,
    pub port: Option<PortValue>,
}

/// Reference from a route to a strip-prefix middleware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareRef {
    pub name: String,
    pub namespace: String,
}

/// One route entry of the consolidated IngressRoute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub kind: String,
    #[serde(
        rename = "match",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub match_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middlewares: Option<Vec<MiddlewareRef>>,
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceRef>>,
}

/// Spec of the consolidated IngressRoute document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRouteSpec {
    #[serde(rename = "entryPoints")]
    pub entry_points: Vec<String>,
    pub routes: Vec<Route>,
}

/// The consolidated IngressRoute aggregating every derived route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRouteDoc {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: IngressRouteSpec,
}

/// `spec.stripPrefix` of a middleware document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripPrefix {
    pub prefixes: Vec<String>,
}

/// Spec of a strip-prefix middleware document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareSpec {
    #[serde(rename = "stripPrefix")]
    pub strip_prefix: StripPrefix,
}

/// A per-resource strip-prefix Middleware document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareDoc {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: MiddlewareSpec,
}
