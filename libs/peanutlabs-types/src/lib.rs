//! Shared types and checksum primitives for Peanut Labs publisher integrations.
//!
//! This crate provides:
//! - The keyed MD5 checksum shared with the Peanut Labs network
//! - User ID generation (`{end_user_id}-{application_id}-{checksum}`)
//! - Reward callback hash verification
//! - Reward notification, status and offer types

mod checksum;
mod errors;
mod identity;
mod notification;
mod status;
mod verify;

pub use checksum::keyed_checksum;
pub use errors::PeanutError;
pub use identity::{MAX_END_USER_ID_LEN, PeanutUserId, generate_user_id, validate_end_user_id};
pub use notification::{Offer, RewardNotification};
pub use status::{NotificationResponse, OfferType, TransactionStatus};
pub use verify::{valid_oid_hash, valid_txn_hash, verify_callback_hashes};
