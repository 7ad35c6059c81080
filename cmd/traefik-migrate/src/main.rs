use clap::{Parser, Subcommand};
use pkg_constants::paths::DEFAULT_CONFIG_PATH;
use pkg_migrate::{EmitMode, FileSink, KubectlSource, Migrator, MigratorConfig, OutputFormat};
use pkg_types::config::{MigrateConfigFile, load_config_file};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "traefik-migrate",
    about = "Migrate Traefik v1 Ingresses to a v2 fallback IngressRoute"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Reuse the existing snapshot instead of re-running kubectl
    #[arg(long)]
    reuse_snapshot: bool,

    /// Path of the ingress snapshot file
    #[arg(long)]
    snapshot: Option<String>,

    /// Directory for generated documents
    #[arg(long)]
    output_dir: Option<String>,

    /// Namespace for the consolidated IngressRoute
    #[arg(long)]
    fallback_namespace: Option<String>,

    /// Namespace for strip-prefix Middlewares
    #[arg(long)]
    middleware_namespace: Option<String>,

    /// Output serialization: yaml or json
    #[arg(long)]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the fallback IngressRoute and all Middlewares (default)
    Migrate,
    /// Generate only the consolidated IngressRoute document
    Ingressroute,
    /// Generate only the strip-prefix Middleware documents
    Middlewares,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: MigrateConfigFile = load_config_file(&cli.config)?;

    // Merge: CLI args > config file > defaults
    let defaults = MigratorConfig::default();
    let generate_new_snapshot = if cli.reuse_snapshot {
        false
    } else {
        file_cfg
            .generate_new_snapshot
            .unwrap_or(defaults.generate_new_snapshot)
    };
    let output_format = cli
        .output
        .or(file_cfg.output_format)
        .map(|s| s.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or(defaults.output_format);
    let config = MigratorConfig {
        generate_new_snapshot,
        fallback_namespace: cli
            .fallback_namespace
            .or(file_cfg.fallback_namespace)
            .unwrap_or(defaults.fallback_namespace),
        middleware_namespace: cli
            .middleware_namespace
            .or(file_cfg.middleware_namespace)
            .unwrap_or(defaults.middleware_namespace),
        output_format,
        snapshot_path: cli
            .snapshot
            .or(file_cfg.snapshot_path)
            .unwrap_or(defaults.snapshot_path),
        output_dir: cli
            .output_dir
            .or(file_cfg.output_dir)
            .unwrap_or(defaults.output_dir),
    };

    info!("Snapshot:      {} (refresh: {})", config.snapshot_path, config.generate_new_snapshot);
    info!("Output dir:    {} ({})", config.output_dir, config.output_format);
    info!("Fallback ns:   {}", config.fallback_namespace);
    info!("Middleware ns: {}", config.middleware_namespace);

    let mode = match cli.command.unwrap_or(Commands::Migrate) {
        Commands::Migrate => EmitMode::All,
        Commands::Ingressroute => EmitMode::IngressRoute,
        Commands::Middlewares => EmitMode::Middlewares,
    };

    let source = KubectlSource::new(&config.snapshot_path, config.generate_new_snapshot);
    let mut sink = FileSink::new(&config.output_dir, config.output_format)?;
    Migrator::new(config).run(&source, &mut sink, mode)?;

    Ok(())
}
