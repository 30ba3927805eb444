use crate::common::timestamp_utils::{self, LOG_TIMESTAMP_FORMAT};
use crate::errors::AppError;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;

/// Configure the process-wide logger to append informational-and-above
/// records to `log_file`, each prefixed with a local timestamp.
pub fn setup_logging(log_file: &str) -> Result<(), AppError> {
    setup_logging_with_level(log_file, LevelFilter::Info)
}

pub fn setup_logging_with_level(log_file: &str, level: LevelFilter) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| AppError::Io(format!("Failed to open log file '{}': {}", log_file, e)))?;

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}",
                timestamp_utils::current_local_timestamp_str(LOG_TIMESTAMP_FORMAT),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)));

    // First successful call wins; a logger can only be installed once per
    // process, so later calls keep the existing configuration.
    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Logger already initialized, keeping existing configuration: {}", e);
    });
    Ok(())
}
