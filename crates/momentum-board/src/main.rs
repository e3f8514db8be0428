/*
[INPUT]:  CLI arguments, YAML configuration file, MOMENTUM__* env, OS shutdown signals
[OUTPUT]: Interactive task board, config validation, or a generated config file
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
[UPDATE]: 2026-10-14 Route TUI logs into the in-memory buffer and optional file
*/

mod cli;
mod tui;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use momentum_board::{BoardConfig, TaskSource};

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "momentum-board", version, about = "Momentum task board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Overrides `log.level` from the configuration
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Show the fixed demo cards instead of GET /tasks
    #[arg(long = "mock-tasks")]
    mock_tasks: bool,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a configuration file interactively
    Init {
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = args.command {
        let output = match output.or_else(BoardConfig::default_path) {
            Some(path) => path,
            None => return Err(anyhow!("no config directory found; pass --output")),
        };
        return cli::init::run_init(output);
    }

    let mut config =
        BoardConfig::load(args.config_path.as_deref()).context("load configuration")?;
    if args.mock_tasks {
        config.board.task_source = TaskSource::Mock;
    }
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.log.level.clone());

    if args.dry_run {
        init_tracing(&log_level)?;
        config.build_client().context("build API client")?;
        info!(
            base_url = %config.api.base_url,
            task_source = ?config.board.task_source,
            token_configured = config.credentials().is_some(),
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    let _log_guard = init_tui_tracing(&log_level, log_buffer.clone(), config.log.file.as_deref())?;

    let client = config.build_client().context("build API client")?;
    if config.credentials().is_none() {
        warn!("no API token configured; requests will be sent without Authorization");
    }
    info!(
        base_url = %config.api.base_url,
        task_source = ?config.board.task_source,
        "starting momentum board"
    );

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    tui::run_tui_with_log(
        Arc::new(client),
        config.board.task_source,
        log_buffer,
        shutdown,
    )
    .await
    .context("run board")?;

    info!("board closed");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Logs go to the in-memory buffer shown on the Logs tab, and to `file` when set
fn init_tui_tracing(
    log_level: &str,
    buffer: LogBufferHandle,
    file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(LogWriterFactory::new(buffer));

    let (file_layer, guard) = match file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log.file {} has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log directory {}", dir.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
