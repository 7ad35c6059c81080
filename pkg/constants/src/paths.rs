//! Filesystem path and document target constants.

/// Default config file path for the migrator CLI.
pub const DEFAULT_CONFIG_PATH: &str = "traefik-migrate.yaml";

/// Default location of the captured ingress snapshot.
pub const DEFAULT_SNAPSHOT_PATH: &str = "tmp/ingresses.json";

/// Default directory for generated documents.
pub const DEFAULT_OUTPUT_DIR: &str = "tmp";

/// Target name (file stem) of the consolidated IngressRoute document.
pub const INGRESSROUTE_TARGET: &str = "ingressroute";

/// Prefix for per-resource middleware document targets.
/// Full target = `MIDDLEWARE_TARGET_PREFIX + ingress_name`.
pub const MIDDLEWARE_TARGET_PREFIX: &str = "middleware-";
