use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the process-wide logger with fern.
///
/// Output goes to `log_file` when one is configured, otherwise to stdout
/// (colored for TTYs, plain for systemd/docker logs).
pub fn initialize(
    level: fr_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let dispatch = Dispatch::new().level(level.0);

    let dispatch = if let Some(ref path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ServerError::Logging {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;

        // Files never get color codes.
        dispatch.format(plain_format).chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        dispatch
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {} [{}:{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    colors.color(record.level()),
                    message,
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        dispatch.format(plain_format).chain(std::io::stdout())
    };

    dispatch.apply().map_err(|e| ServerError::Logging {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={:?}, file={}", level.0, path.display()),
        None => info!("Logger initialized: level={:?}, stdout", level.0),
    }

    // Bridge tracing to log (axum/tower emit tracing events)
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn plain_format(out: fern::FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.level(),
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
