//! Drives a full migration run: fetch, derive in memory, emit.

use anyhow::{Context, Result};
use pkg_constants::paths::{
    DEFAULT_OUTPUT_DIR, DEFAULT_SNAPSHOT_PATH, INGRESSROUTE_TARGET, MIDDLEWARE_TARGET_PREFIX,
};
use pkg_constants::traefik::{
    DEFAULT_ENTRY_POINT, DEFAULT_FALLBACK_NAMESPACE, DEFAULT_MIDDLEWARE_NAMESPACE,
    FALLBACK_INGRESSROUTE_NAME, INGRESSROUTE_KIND, TRAEFIK_API_VERSION,
};
use pkg_types::ingress::Ingress;
use pkg_types::ingressroute::{IngressRouteDoc, IngressRouteSpec, MiddlewareDoc, ObjectMeta};
use tracing::info;

use crate::middleware::build_middleware;
use crate::routes::build_routes;
use crate::sink::{DocumentSink, OutputFormat};
use crate::source::IngressSource;

/// Settings for one migration run.
#[derive(Debug, Clone)]
pub struct MigratorConfig {
    /// Re-capture the live cluster snapshot before reading it.
    pub generate_new_snapshot: bool,
    /// Namespace of the consolidated IngressRoute.
    pub fallback_namespace: String,
    /// Namespace of generated middlewares and middleware references.
    pub middleware_namespace: String,
    /// Serialization of emitted documents.
    pub output_format: OutputFormat,
    /// Location of the ingress snapshot file.
    pub snapshot_path: String,
    /// Directory for emitted documents.
    pub output_dir: String,
}

impl Default for MigratorConfig {
    fn default() -> Self {
        Self {
            generate_new_snapshot: true,
            fallback_namespace: DEFAULT_FALLBACK_NAMESPACE.to_string(),
            middleware_namespace: DEFAULT_MIDDLEWARE_NAMESPACE.to_string(),
            output_format: OutputFormat::Yaml,
            snapshot_path: DEFAULT_SNAPSHOT_PATH.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// Which derived documents a run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitMode {
    /// Consolidated IngressRoute plus all middlewares.
    #[default]
    All,
    /// Consolidated IngressRoute only.
    IngressRoute,
    /// Strip-prefix middlewares only.
    Middlewares,
}

impl EmitMode {
    fn emits_middlewares(self) -> bool {
        matches!(self, EmitMode::All | EmitMode::Middlewares)
    }

    fn emits_ingress_route(self) -> bool {
        matches!(self, EmitMode::All | EmitMode::IngressRoute)
    }
}

/// Everything one run derives, built before anything is written.
#[derive(Debug, Clone)]
pub struct MigrationOutput {
    pub ingress_route: IngressRouteDoc,
    /// Strip-prefix middlewares keyed by the owning resource name.
    pub middlewares: Vec<(String, MiddlewareDoc)>,
}

/// Translates a snapshot of legacy Ingresses into Traefik v2 documents.
pub struct Migrator {
    config: MigratorConfig,
}

impl Migrator {
    pub fn new(config: MigratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MigratorConfig {
        &self.config
    }

    /// Pure derivation — no I/O.
    ///
    /// Routes accumulate in snapshot order, one per (rule, path) pair;
    /// resources without a `rules` field are skipped silently. One
    /// middleware per resource that has at least one non-root path.
    pub fn migrate(&self, items: &[Ingress]) -> MigrationOutput {
        let mut routes = Vec::new();
        let mut middlewares = Vec::new();
        for item in items {
            let Some(rules) = &item.spec.rules else { continue };
            routes.extend(build_routes(
                &item.metadata.name,
                item.namespace(),
                rules,
                &self.config.middleware_namespace,
            ));
            if let Some(doc) = build_middleware(
                &item.metadata.name,
                rules,
                &self.config.middleware_namespace,
            ) {
                middlewares.push((item.metadata.name.clone(), doc));
            }
        }
        let ingress_route = IngressRouteDoc {
            api_version: TRAEFIK_API_VERSION.to_string(),
            kind: INGRESSROUTE_KIND.to_string(),
            metadata: ObjectMeta {
                name: FALLBACK_INGRESSROUTE_NAME.to_string(),
                namespace: self.config.fallback_namespace.clone(),
            },
            spec: IngressRouteSpec {
                entry_points: vec![DEFAULT_ENTRY_POINT.to_string()],
                routes,
            },
        };
        MigrationOutput {
            ingress_route,
            middlewares,
        }
    }

    /// Fetch the resource list, derive all documents, render and emit the
    /// ones selected by `mode`. Middlewares go out first (one per owning
    /// resource), the consolidated IngressRoute last.
    pub fn run(
        &self,
        source: &dyn IngressSource,
        sink: &mut dyn DocumentSink,
        mode: EmitMode,
    ) -> Result<()> {
        let items = source
            .list_ingresses()
            .context("listing legacy Ingress resources")?;
        info!("Loaded {} legacy Ingress resources", items.len());

        let output = self.migrate(&items);
        info!(
            "Derived {} routes and {} strip-prefix middlewares",
            output.ingress_route.spec.routes.len(),
            output.middlewares.len()
        );

        let format = self.config.output_format;
        if mode.emits_middlewares() {
            for (resource, doc) in &output.middlewares {
                let rendered = format.render(doc)?;
                let target = format!("{}{}", MIDDLEWARE_TARGET_PREFIX, resource);
                sink.write_document(&target, &rendered)
                    .with_context(|| format!("writing middleware document for {}", resource))?;
            }
        }
        if mode.emits_ingress_route() {
            let rendered = format.render(&output.ingress_route)?;
            sink.write_document(INGRESSROUTE_TARGET, &rendered)
                .context("writing consolidated IngressRoute document")?;
        }
        Ok(())
    }
}
