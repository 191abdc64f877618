//! On-disk format of the snippet store
//!
//! Current layout (schema version 1):
//!
//! ```json
//! { "schemaVersion": 1, "lastSeenVersion": "0.1.0", "snippets": [ ... ] }
//! ```
//!
//! Schema version 0 is the un-versioned legacy blob: a bare JSON array of
//! snippet records. It is accepted on read and rewritten as version 1 on the
//! next write.

use crypt_core::Snippet;
use serde::{Deserialize, Serialize};

use crate::errors::{serde_error, unsupported_schema, Result};

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned store document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFileV1 {
    /// Schema version (1 for this format)
    pub schema_version: u32,

    /// Application version the user last ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_version: Option<String>,

    /// Buried snippets in insertion order
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

impl Default for StoreFileV1 {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            last_seen_version: None,
            snippets: Vec::new(),
        }
    }
}

/// Decode a store document, migrating older layouts
///
/// Blank input decodes to an empty store.
///
/// # Errors
///
/// Returns `Persistence` for malformed JSON, an unexpected top-level shape,
/// or a schema version newer than [`SCHEMA_VERSION`].
pub fn decode(bytes: &[u8]) -> Result<StoreFileV1> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(StoreFileV1::default());
    }

    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| serde_error("decode_store", e))?;

    let version = value
        .get("schemaVersion")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);

    match value {
        serde_json::Value::Array(_) => {
            let snippets: Vec<Snippet> =
                serde_json::from_value(value).map_err(|e| serde_error("migrate_legacy", e))?;
            tracing::debug!(count = snippets.len(), "migrating un-versioned store");
            Ok(StoreFileV1 {
                snippets,
                ..StoreFileV1::default()
            })
        }
        serde_json::Value::Object(_) => {
            if version > u64::from(SCHEMA_VERSION) {
                return Err(unsupported_schema(version, SCHEMA_VERSION));
            }

            let mut file: StoreFileV1 =
                serde_json::from_value(value).map_err(|e| serde_error("decode_store", e))?;
            file.schema_version = SCHEMA_VERSION;
            Ok(file)
        }
        _ => Err(crypt_core::CryptError::persistence(
            "decode_store",
            "store payload must be a JSON object or array",
        )),
    }
}

/// Encode a store document as pretty JSON
///
/// # Errors
///
/// Returns `Persistence` if serialization fails.
pub fn encode(file: &StoreFileV1) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(file).map_err(|e| serde_error("encode_store", e))
}
