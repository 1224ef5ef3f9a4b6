use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;
use std::{fs::OpenOptions, io::Write, path::Path};

// ------------------ PARAMETERS ------------------
pub const RESET_LOG_FILE: &str = "admin_reset.log"; // Audit trail of store resets

// ------------------ HELPERS ------------------

// Current timestamp in Eastern Time (EST/EDT)
fn now_est() -> DateTime<chrono_tz::Tz> {
    New_York.from_utc_datetime(&Utc::now().naive_utc())
}

// ------------------ LOGGING ------------------

// Append "<timestamp> | <username> | <event>" to the given log file
pub fn log_event_to(path: &Path, username: &str, event: &str) -> Result<()> {
    let timestamp = now_est().to_rfc3339();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    writeln!(file, "{} | {} | {}", timestamp, username, event)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// Log event to the default audit file
pub fn log_event(username: &str, event: &str) -> Result<()> {
    log_event_to(Path::new(RESET_LOG_FILE), username, event)
}
