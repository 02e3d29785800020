//! Diagnostic logging.
//!
//! The TUI owns stdout, so tracing output goes to a log file under the
//! user's cache directory instead. Network and server failures land here
//! with detail; the status bar only ever shows the generic notice.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is not set.
const DEFAULT_FILTER: &str = "circdesk=info";

/// Initialize the global tracing subscriber, writing to
/// `<cache-dir>/circdesk/circdesk.log`.
///
/// Returns the log path, or None when logging could not be set up — the
/// app is fully usable without it, so failures are not fatal.
pub fn init() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("circdesk");
    std::fs::create_dir_all(&dir).ok()?;
    let path = dir.join("circdesk.log");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
