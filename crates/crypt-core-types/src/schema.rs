//! Canonical event values for structured logging
//!
//! The logging macros stamp every operation record with one of these as its
//! `event` field; log consumers and tests match on them.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
