use crate::prelude::*;

use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};
use std::str::FromStr;

const RUST_LOG_ENV: &str = "RUST_LOG";

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

/// Logs go to stderr, stdout is reserved for command output.
pub(crate) fn init_logging_with_level(log_level: LevelFilter) -> Result<(), CliError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CliError::LoggerInstall {
            underlying: e.to_string(),
        })?;

    debug!("Logging initialized with level: {log_level}");
    Ok(())
}

fn parse_log_level_from_str(log_level: &str) -> Result<LevelFilter, CliError> {
    LevelFilter::from_str(log_level).map_err(|_| CliError::InvalidLogLevel {
        bad_value: log_level.to_owned(),
    })
}

/// Reads the level from `RUST_LOG`, `info` when unset.
pub fn init_logging() -> Result<(), CliError> {
    let log_level = match std::env::var(RUST_LOG_ENV) {
        Ok(log_level) => parse_log_level_from_str(&log_level)?,
        Err(_) => LevelFilter::Info,
    };
    init_logging_with_level(log_level)
}
