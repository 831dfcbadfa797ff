//! Logger module
//!
//! Logging utilities for the calculation server:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Leveled error, warning and debug output
//! - File-based logging support
//!
//! Before `init` runs (and in tests) messages go straight to stdout/stderr.

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::LogLevel;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config
        .logging
        .level
        .parse::<LogLevel>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_debug(message: &str) {
    if let Some(w) = writer::get() {
        w.write_debug(message);
    }
}

fn write_warn(message: &str) {
    match writer::get() {
        Some(w) => w.write_warn(message),
        None => eprintln!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Lucas calculation server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Calculate endpoint: POST http://{addr}{}",
        config.lucas.path
    ));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.lucas.offload {
        write_info("Calculations run on the blocking thread pool");
    } else {
        write_info("Calculations run inline on the connection's worker thread");
    }
    if let Some(max_n) = config.lucas.max_n {
        write_info(&format!("Maximum n: {max_n}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_warn(&format!("[WARN] {message}"));
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        write_info(&format!("[Headers] Count: {count}"));
    }
}

pub fn log_calculation(n: u64, result: u128, process_time: f64) {
    write_debug(&format!(
        "[Lucas] n={n} result={result} process_time={process_time:.3}ms"
    ));
}

pub fn log_rejected(reason: &str) {
    write_warn(&format!("[Lucas] Rejected request: {reason}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown() {
    write_info("\n[Shutdown] Stopped accepting connections");
}
