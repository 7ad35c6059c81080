use pkg_constants::traefik::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

/// Top-level shape of `kubectl get ingress -A -o json` output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressList {
    #[serde(default)]
    pub items: Vec<Ingress>,
}

/// A single legacy Ingress resource from the cluster snapshot.
///
/// Every nested field a manifest may legally omit is optional here, so a
/// snapshot with sparse entries deserializes without errors. Unknown keys
/// (status, annotations, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingress {
    pub metadata: IngressMetadata,
    #[serde(default)]
    pub spec: IngressSpec,
}

impl Ingress {
    /// Resource namespace, defaulting to `default` when the manifest omits it.
    pub fn namespace(&self) -> &str {
        self.metadata
            .namespace
            .as_deref()
            .unwrap_or(DEFAULT_NAMESPACE)
    }
}

/// Identifying metadata of an Ingress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressMetadata {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Ingress specification.
///
/// `rules: None` marks a resource that routes nothing; callers skip it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressSpec {
    #[serde(default)]
    pub rules: Option<Vec<IngressRule>>,
}

/// A single host-based Ingress rule.
///
/// A rule without an `http` block contributes no paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressRule {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub http: Option<IngressHTTP>,
}

/// HTTP paths for a host rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressHTTP {
    #[serde(default)]
    pub paths: Vec<IngressPath>,
}

/// A single path entry within an Ingress HTTP rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressPath {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub backend: Option<IngressBackend>,
}

/// Backend reference of a path entry (networking.k8s.io/v1 shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngressBackend {
    #[serde(default)]
    pub service: Option<BackendService>,
}

/// Service target inside a backend reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendService {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub port: Option<BackendServicePort>,
}

/// Service port selector: numeric port preferred, named port the fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendServicePort {
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}
