use anyhow::Result;
use camscan::common::logging_setup::setup_logging;
use log::{debug, info};
use std::fs;

// The process-wide logger can only be installed once, so everything that
// exercises setup_logging lives in this one test.
#[test]
fn configured_logger_writes_timestamped_info_lines() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let first_log = dir.path().join("scan.log");
    let second_log = dir.path().join("other.log");

    setup_logging(&first_log.to_string_lossy())?;

    info!("registry loaded");
    debug!("should be filtered out");
    log::logger().flush();

    let contents = fs::read_to_string(&first_log)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one record, got: {:?}", lines);

    let line = lines[0];
    assert!(line.ends_with("registry loaded"), "{}", line);
    // Timestamp prefix: "YYYY-MM-DD HH:MM:SS.mmm <message>"
    let prefix = &line[..line.len() - "registry loaded".len()];
    assert!(prefix.contains('-') && prefix.contains(':'), "no timestamp in '{}'", line);
    assert!(!contents.contains("should be filtered out"));

    // A second call must not reconfigure the installed logger; records keep
    // flowing to the first file.
    setup_logging(&second_log.to_string_lossy())?;
    info!("still going to the first file");
    log::logger().flush();

    let contents = fs::read_to_string(&first_log)?;
    assert!(contents.contains("still going to the first file"));
    assert_eq!(fs::read_to_string(&second_log)?, "");
    Ok(())
}
