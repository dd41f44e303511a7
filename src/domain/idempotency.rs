//! Identifier derivation
//!
//! Maps a client-supplied idempotency key to the resource's public
//! identifier. Creation is idempotent because the identifier is a pure
//! function of the key.

use uuid::Uuid;

/// Namespace for name-based identifier derivation. Pinned to the nil UUID;
/// changing it would change every derived identifier in the system.
const ID_NAMESPACE: Uuid = Uuid::nil();

/// Derive the stable resource identifier for an idempotency key.
///
/// Name-based UUID (version 5) over [`ID_NAMESPACE`]: the same key always
/// yields the same identifier, distinct keys yield distinct identifiers
/// for all practical purposes.
pub fn derive_resource_id(idempotency_key: &str) -> Uuid {
    Uuid::new_v5(&ID_NAMESPACE, idempotency_key.as_bytes())
}
