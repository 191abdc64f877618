//! Crypt Engine - Orchestration layer
//!
//! Owns one [`CryptContext`] per workspace session and coordinates the core
//! lifecycle operations, the snippet store and the host capabilities. The
//! engine is the logging boundary: every mutating operation emits
//! `log_op_start!` / `log_op_end!` / `log_op_error!` and returns [`ExError`].

pub mod commands;
pub mod config;
pub mod context;
pub mod sync;

use crypt_core::ExError;

/// Result type at the engine boundary
pub type Result<T> = std::result::Result<T, ExError>;

pub use commands::rename::{pump_renames, QueuedRenameSource};
pub use commands::restore::{restore, restore_at_cursor, RestoreOutcome};
pub use config::CryptConfig;
pub use context::CryptContext;
pub use sync::{DecorationSynchronizer, SyncTrigger};
