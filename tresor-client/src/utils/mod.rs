//! Utility modules.

/// Log sanitization utilities to keep secrets out of the logs.
pub mod log_sanitizer;
