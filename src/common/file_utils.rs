use crate::errors::AppError;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Default destination for raw scan log lines.
pub const DEFAULT_LOG_FILE: &str = "../logs/scan.log";

/// Append `message` plus a newline to `log_file`, creating the file if
/// absent. Parent directories are never created; a missing directory
/// surfaces as an I/O error. This path is independent of the configured
/// logger and adds no timestamp or level.
pub fn log_message(message: &str, log_file: &str) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| AppError::Io(format!("Failed to open log file '{}' for append: {}", log_file, e)))?;

    writeln!(file, "{}", message)
        .map_err(|e| AppError::Io(format!("Failed to append to log file '{}': {}", log_file, e)))?;
    Ok(())
}

pub fn ensure_log_directory(dir_path_str: &str) -> Result<PathBuf, AppError> {
    let dir_path = PathBuf::from(dir_path_str);
    if !dir_path.exists() {
        debug!("Log directory '{}' does not exist, attempting to create it.", dir_path.display());
        std::fs::create_dir_all(&dir_path).map_err(|e| {
            AppError::Io(format!(
                "Failed to create log directory '{}': {}",
                dir_path.display(),
                e
            ))
        })?;
    } else if !dir_path.is_dir() {
        return Err(AppError::Io(format!(
            "Log path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(dir_path)
}
