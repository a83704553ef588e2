use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: echo_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref log_path) = log_file {
        ensure_parent_dir(log_path)?;

        // File output (no colors, plain format)
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|source| ServerError::LogFile {
                path: log_path.clone(),
                source,
            })?;

        formatted(|level| level).chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        formatted(move |level| colors.color(level)).chain(std::io::stdout())
    } else {
        // Plain output for non-TTY (systemd, docker logs)
        formatted(|level| level).chain(std::io::stdout())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: e.to_string(),
        })?;

    if let Some(ref path) = log_file {
        info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        );
    } else {
        info!("Logger initialized: level={:?}, stdout", level_filter);
    }

    Ok(())
}

/// Dispatch writing `[date - LEVEL] message [file:line]`
///
/// `level_label` decides how the level is rendered, which is the only thing
/// that differs between outputs.
pub(crate) fn formatted<F, L>(level_label: F) -> Dispatch
where
    F: Fn(Level) -> L + Send + Sync + 'static,
    L: Display,
{
    Dispatch::new().format(move |out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = level_label(record.level()),
            message = message,
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    })
}

fn ensure_parent_dir(log_path: &Path) -> ServerErrorResult<()> {
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ServerError::LogDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}
