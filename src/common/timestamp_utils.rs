use chrono::Local;

/// strftime format for records written through the configured logger.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Current local time rendered with the given strftime format.
pub fn current_local_timestamp_str(format_str: &str) -> String {
    Local::now().format(format_str).to_string()
}
