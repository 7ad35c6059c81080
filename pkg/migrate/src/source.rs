//! Legacy Ingress snapshot capture and parsing.

use anyhow::{Context, Result, bail};
use pkg_types::ingress::{Ingress, IngressList};
use std::path::PathBuf;
use tracing::info;

/// Provider of the legacy Ingress resource list.
pub trait IngressSource {
    fn list_ingresses(&self) -> Result<Vec<Ingress>>;
}

/// Reads Ingresses from a JSON snapshot file, optionally re-capturing the
/// snapshot first via `kubectl get ingress -A -o json` (the subprocess
/// inherits `KUBECONFIG` from the environment).
pub struct KubectlSource {
    snapshot_path: PathBuf,
    refresh: bool,
}

impl KubectlSource {
    pub fn new(snapshot_path: impl Into<PathBuf>, refresh: bool) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            refresh,
        }
    }

    fn capture_snapshot(&self) -> Result<()> {
        if let Some(parent) = self.snapshot_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create snapshot directory {}", parent.display())
            })?;
        }
        let output = std::process::Command::new("kubectl")
            .args(["get", "ingress", "-A", "-o", "json"])
            .output()
            .context("failed to run kubectl")?;
        if !output.status.success() {
            bail!(
                "kubectl get ingress exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        std::fs::write(&self.snapshot_path, &output.stdout).with_context(|| {
            format!(
                "failed to write ingress snapshot {}",
                self.snapshot_path.display()
            )
        })?;
        info!(
            "Captured ingress snapshot to {}",
            self.snapshot_path.display()
        );
        Ok(())
    }
}

impl IngressSource for KubectlSource {
    fn list_ingresses(&self) -> Result<Vec<Ingress>> {
        if self.refresh {
            self.capture_snapshot()?;
        }
        let content = std::fs::read_to_string(&self.snapshot_path).with_context(|| {
            format!(
                "failed to read ingress snapshot {}",
                self.snapshot_path.display()
            )
        })?;
        let list: IngressList = serde_json::from_str(&content).with_context(|| {
            format!(
                "malformed ingress snapshot {}",
                self.snapshot_path.display()
            )
        })?;
        Ok(list.items)
    }
}

/// An already-materialized resource list is itself a source. Used in tests.
impl IngressSource for Vec<Ingress> {
    fn list_ingresses(&self) -> Result<Vec<Ingress>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_snapshot_without_refresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingresses.json");
        std::fs::write(
            &path,
            r#"{"items": [{"metadata": {"name": "app1", "namespace": "ns1"}, "spec": {}}]}"#,
        )
        .unwrap();

        let source = KubectlSource::new(&path, false);
        let items = source.list_ingresses().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].metadata.name, "app1");
    }

    #[test]
    fn missing_snapshot_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let source = KubectlSource::new(dir.path().join("absent.json"), false);
        let err = source.list_ingresses().unwrap_err();
        assert!(err.to_string().contains("failed to read ingress snapshot"));
    }

    #[test]
    fn malformed_snapshot_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingresses.json");
        std::fs::write(&path, "{not json").unwrap();

        let source = KubectlSource::new(&path, false);
        let err = source.list_ingresses().unwrap_err();
        assert!(err.to_string().contains("malformed ingress snapshot"));
    }

    #[test]
    fn vec_source_returns_its_items() {
        let items: Vec<Ingress> = serde_json::from_str(
            r#"[{"metadata": {"name": "a"}, "spec": {}}, {"metadata": {"name": "b"}, "spec": {}}]"#,
        )
        .unwrap();
        assert_eq!(items.list_ingresses().unwrap().len(), 2);
    }
}
