use serde::{Deserialize, Serialize};

/// Migrator configuration file (YAML).
///
/// Example `traefik-migrate.yaml`:
/// ```yaml
/// generate-new-snapshot: false
/// fallback-namespace: kube-system
/// middleware-namespace: traefik-middleware
/// output-format: json
/// snapshot-path: tmp/ingresses.json
/// output-dir: tmp
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrateConfigFile {
    #[serde(default, alias = "generate-new-snapshot")]
    pub generate_new_snapshot: Option<bool>,
    #[serde(default, alias = "fallback-namespace")]
    pub fallback_namespace: Option<String>,
    #[serde(default, alias = "middleware-namespace")]
    pub middleware_namespace: Option<String>,
    #[serde(default, alias = "output-format")]
    pub output_format: Option<String>,
    #[serde(default, alias = "snapshot-path")]
    pub snapshot_path: Option<String>,
    #[serde(default, alias = "output-dir")]
    pub output_dir: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
