//! Rust SDK for Peanut Labs publisher integrations.
//!
//! This SDK covers the publisher side of the Peanut Labs protocol.
//!
//! # Features
//!
//! - **User IDs** - Generate the checksummed 3 part user ID
//! - **Reward Center links** - Build the `userGreeting.php` redirect URL
//! - **Reward notifications** - Verify `oidHash`/`txnHash` and parse callbacks
//!
//! No network calls are made. Deduplicating transactions and acknowledging
//! callbacks are left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use peanutlabs_sdk::{CallbackQuery, NotificationResponse, Publisher};
//!
//! let publisher = Publisher::new(1, "security_key", "transaction_key")?;
//!
//! // Send the user to the Reward Center
//! let url = publisher.reward_center_url("user-42")?;
//!
//! // Handle a callback
//! let query = CallbackQuery::parse(raw_query);
//! let reward = publisher.process_reward_notification(&query)?;
//! println!("Transaction: {}", reward.transaction_id);
//! ```

mod error;
mod notification;
mod params;
mod publisher;

pub use error::NotificationError;
pub use notification::{keys, parse_notification};
pub use params::{CallbackQuery, QueryParams};
pub use publisher::{DEFAULT_HOST, Publisher};

// Re-export shared types for convenience
pub use peanutlabs_types::{
    NotificationResponse, Offer, OfferType, PeanutError, PeanutUserId, RewardNotification,
    TransactionStatus, keyed_checksum,
};
