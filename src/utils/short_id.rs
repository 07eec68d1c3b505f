//! Short identifier generation.
//!
//! Identifiers are derived from 128 bits of randomness with version-4 UUID
//! semantics, base-58 encoded (the Bitcoin alphabet, so no `0`, `O`, `I`,
//! or `l`), and truncated to 7 characters.

use crate::error::AppError;
use serde_json::json;
use uuid::Builder;

/// Length of a public short identifier.
pub const SHORT_ID_LENGTH: usize = 7;

/// Generates a random short identifier.
///
/// The 7-character identifier keeps only ~41 bits of the original entropy,
/// so collisions are possible at scale; callers inserting into the store
/// must be prepared to retry on a duplicate key.
///
/// # Errors
///
/// Returns [`AppError::Internal`] when the operating system random source
/// is unavailable.
pub fn generate_short_id() -> Result<String, AppError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes).map_err(|e| {
        AppError::internal(
            "Random source unavailable",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let raw = Builder::from_random_bytes(bytes).into_uuid();

    // base-58 of 16 bytes is always at least 16 characters, so the
    // truncation below cannot come up short.
    let mut encoded = bs58::encode(raw.as_bytes()).into_string();
    encoded.truncate(SHORT_ID_LENGTH);

    Ok(encoded)
}
