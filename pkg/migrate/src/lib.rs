//! Translates legacy Traefik v1 `Ingress` resources into one consolidated
//! v2 `IngressRoute` plus per-resource strip-prefix `Middleware`s.
//!
//! The derivation core (`matcher`, `routes`, `middleware`) is pure; all
//! I/O lives behind the `IngressSource` and `DocumentSink` seams.

pub mod matcher;
pub mod middleware;
pub mod migrator;
pub mod routes;
pub mod sink;
pub mod source;

pub use migrator::{EmitMode, MigrationOutput, Migrator, MigratorConfig};
pub use sink::{DocumentSink, FileSink, MemorySink, OutputFormat};
pub use source::{IngressSource, KubectlSource};
