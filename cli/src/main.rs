use appshell_cli::app;
use appshell_cli::commands::cli;
use appshell_core::api::{AppContext, CliError, LoggingConfig};
use appshell_plugins::services::PluginServicesFactory;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let explicit = args.config.as_deref().map(std::path::Path::new);
    let cfg =
        appshell_core::config::load(explicit).map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Command)?;

    let ctx = AppContext::new(cfg, &PluginServicesFactory)
        .await
        .map_err(|e| CliError::Config(format!("failed to build services: {e}")))?;

    app::dispatch(args, &ctx).await
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 2: invalid arguments (same code clap uses for parse errors)
    // 11: config error
    // 20: storage / IO error
    // 30: credential write or delete failed
    // 50: internal/uncategorized
    match e {
        CliError::Usage(_) => 2,
        CliError::Config(_) => 11,
        CliError::Storage(_) => 20,
        CliError::Appearance(_) => 20,
        CliError::Io(_) => 20,
        CliError::Command(_) => 20,
        CliError::Session(_) => 30,
        CliError::Anyhow(_) => 50,
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = log_dir(logging)?;
        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("appshell.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// Configured log directory, else `<data dir>/logs`.
fn log_dir(logging: &LoggingConfig) -> Result<std::path::PathBuf, String> {
    match logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(d) => Ok(std::path::PathBuf::from(d)),
        None => appshell_core::config::get_appshell_data_dir()
            .map(|dir| dir.join("logs"))
            .map_err(|e| format!("resolve log dir failed: {e}")),
    }
}
