use crate::checksum::{constant_time_eq, keyed_checksum};

/// Returns true if `oid_hash` is the checksum of the offer invitation ID.
pub fn valid_oid_hash(offer_invitation_id: &str, security_key: &str, oid_hash: &str) -> bool {
    constant_time_eq(&keyed_checksum(&[offer_invitation_id, security_key]), oid_hash)
}

/// Returns true if `txn_hash` is the checksum of the transaction ID.
pub fn valid_txn_hash(transaction_id: &str, transaction_key: &str, txn_hash: &str) -> bool {
    constant_time_eq(&keyed_checksum(&[transaction_id, transaction_key]), txn_hash)
}

/// Authenticates a reward callback.
///
/// Both hashes must match. The result is a single bool on purpose: callers
/// must not be able to tell which of the two failed.
///
/// This must run before any other callback field is trusted.
pub fn verify_callback_hashes(
    offer_invitation_id: &str,
    transaction_id: &str,
    oid_hash: &str,
    txn_hash: &str,
    security_key: &str,
    transaction_key: &str,
) -> bool {
    // Non-short-circuiting so both digests are always computed.
    let oid_ok = valid_oid_hash(offer_invitation_id, security_key, oid_hash);
    let txn_ok = valid_txn_hash(transaction_id, transaction_key, txn_hash);
    oid_ok & txn_ok
}
