use doh_client_domain::config::LoggingConfig;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the background file writer alive; drop it only at process exit.
pub type LogGuard = Option<WorkerGuard>;

const WORKSPACE_TARGETS: [&str; 4] = [
    "doh_client",
    "doh_client_application",
    "doh_client_infrastructure",
    "doh_client_domain",
];

/// Map a configured level name onto a tracing level; unknown names mean `info`.
fn normalize_level(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    }
}

/// `RUST_LOG` when set; otherwise the configured level for this workspace's
/// crates and `warn` for dependencies.
pub fn effective_log_spec(level: &str) -> String {
    match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => spec,
        _ => {
            let level = normalize_level(level);
            let mut spec = String::from("warn");
            for target in WORKSPACE_TARGETS {
                spec.push_str(&format!(",{}={}", target, level));
            }
            spec
        }
    }
}

pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<LogGuard> {
    let filter = EnvFilter::try_new(effective_log_spec(&cfg.level))?;

    let console = cfg.enable_console_logging.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    });

    let mut guard = None;
    let file = if cfg.enable_file_logging {
        let path = Path::new(&cfg.log_file_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file);
        guard = Some(worker_guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed(),
        )
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init();

    Ok(guard)
}
