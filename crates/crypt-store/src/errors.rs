//! Error helpers for crypt-store
//!
//! Every storage failure surfaces as `CryptError::Persistence`, tagged with
//! the operation that failed.

use crypt_core::errors::CryptError;

pub use crypt_core::errors::Result;

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> CryptError {
    CryptError::persistence(op, err.to_string())
}

/// Create a (de)serialization error
pub fn serde_error(op: &str, err: serde_json::Error) -> CryptError {
    CryptError::persistence(op, format!("invalid store payload: {}", err))
}

/// Create an error for a store written by a newer build
pub fn unsupported_schema(found: u64, supported: u32) -> CryptError {
    CryptError::persistence(
        "decode_store",
        format!(
            "store schema version {} is newer than supported version {}",
            found, supported
        ),
    )
}
