//! End-to-end runs over a kubectl-shaped snapshot file.

use pkg_migrate::{EmitMode, FileSink, KubectlSource, MemorySink, Migrator, MigratorConfig, OutputFormat};

const SNAPSHOT: &str = r#"{
    "items": [
        {
            "metadata": {"name": "app1", "namespace": "ns1"},
            "spec": {"rules": [{
                "host": "a.example.com",
                "http": {"paths": [
                    {"path": "/api", "backend": {"service": {"name": "svc1", "port": {"number": 8080}}}},
                    {"path": "/", "backend": {"service": {"name": "svc1", "port": {"number": 8080}}}}
                ]}
            }]}
        },
        {
            "metadata": {"name": "legacy"},
            "spec": {"rules": [{"http": {"paths": [{"path": "/"}]}}]}
        },
        {
            "metadata": {"name": "ruleless"},
            "spec": {}
        }
    ]
}"#;

fn write_snapshot(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("ingresses.json");
    std::fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[test]
fn migrates_a_snapshot_to_yaml_files() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());
    let out_dir = dir.path().join("out");

    let source = KubectlSource::new(&snapshot, false);
    let mut sink = FileSink::new(&out_dir, OutputFormat::Yaml).unwrap();
    Migrator::new(MigratorConfig::default())
        .run(&source, &mut sink, EmitMode::All)
        .unwrap();

    // One middleware for app1 (the only resource with a non-root path),
    // plus the consolidated document. "legacy" and "ruleless" get none.
    let ingressroute = std::fs::read_to_string(out_dir.join("ingressroute.yaml")).unwrap();
    let middleware = std::fs::read_to_string(out_dir.join("middleware-app1.yaml")).unwrap();
    assert!(!out_dir.join("middleware-legacy.yaml").exists());
    assert!(!out_dir.join("middleware-ruleless.yaml").exists());

    assert!(ingressroute.contains("kind: IngressRoute"));
    assert!(ingressroute.contains("name: traefik-v1-fallback"));
    assert!(ingressroute.contains("namespace: kube-system"));
    assert!(ingressroute.contains("match: Host(`a.example.com`) && PathPrefix(`/api`)"));
    assert!(ingressroute.contains("match: Host(`a.example.com`) && Path(`/`)"));
    assert!(ingressroute.contains("match: HostRegexp(`{domain:.+}`) && Path(`/`)"));

    assert!(middleware.contains("kind: Middleware"));
    assert!(middleware.contains("name: app1-mw"));
    assert!(middleware.contains("namespace: traefik-middleware"));
    assert!(middleware.contains("- /api"));
}

#[test]
fn json_output_has_the_expected_structure() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let config = MigratorConfig {
        output_format: OutputFormat::Json,
        ..Default::default()
    };
    let source = KubectlSource::new(&snapshot, false);
    let mut sink = MemorySink::default();
    Migrator::new(config)
        .run(&source, &mut sink, EmitMode::All)
        .unwrap();

    let (target, contents) = sink.documents.last().unwrap();
    assert_eq!(target, "ingressroute");
    let doc: serde_json::Value = serde_json::from_str(contents).unwrap();
    assert_eq!(doc["apiVersion"], "traefik.containo.us/v1alpha1");
    assert_eq!(doc["spec"]["entryPoints"][0], "web");

    let routes = doc["spec"]["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0]["kind"], "Rule");
    assert_eq!(routes[0]["priority"], 2);
    assert_eq!(routes[0]["services"][0]["port"], 8080);
    assert_eq!(routes[0]["middlewares"][0]["name"], "app1-mw");
    // Root-path route routes to the same backend but strips nothing.
    assert!(routes[1].get("middlewares").is_none());
    // Hostless route carries neither middlewares nor services.
    assert!(routes[2].get("services").is_none());
}

#[test]
fn reruns_over_the_same_snapshot_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());
    let source = KubectlSource::new(&snapshot, false);
    let migrator = Migrator::new(MigratorConfig::default());

    let mut first = MemorySink::default();
    let mut second = MemorySink::default();
    migrator.run(&source, &mut first, EmitMode::All).unwrap();
    migrator.run(&source, &mut second, EmitMode::All).unwrap();
    assert_eq!(first.documents, second.documents);
}

#[test]
fn custom_namespaces_flow_into_every_document() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let config = MigratorConfig {
        fallback_namespace: "edge".to_string(),
        middleware_namespace: "edge-mw".to_string(),
        ..Default::default()
    };
    let source = KubectlSource::new(&snapshot, false);
    let mut sink = MemorySink::default();
    Migrator::new(config)
        .run(&source, &mut sink, EmitMode::All)
        .unwrap();

    let middleware = &sink.documents[0].1;
    assert!(middleware.contains("namespace: edge-mw\n"));
    let ingressroute = &sink.documents[1].1;
    assert!(ingressroute.contains("namespace: edge\n"));
    assert!(ingressroute.contains("namespace: edge-mw\n"));
}
