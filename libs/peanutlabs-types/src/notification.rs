use serde::{Deserialize, Serialize};

use crate::{OfferType, TransactionStatus};

/// An offer or survey the user completed to earn the reward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer invitation ID (the field covered by `oidHash`)
    pub id: String,

    pub title: String,

    /// "offer" or "survey" as sent by the network, not normalised
    #[serde(rename = "type")]
    pub kind: String,
}

impl Offer {
    /// Interprets `kind` as a known offer type.
    pub fn offer_type(&self) -> Option<OfferType> {
        OfferType::parse(&self.kind)
    }
}

/// Reward notification delivered by Peanut Labs to the publisher's callback.
///
/// Built fresh per callback, after the hashes have been verified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardNotification {
    /// User ID within the publisher's own application
    pub end_user_id: String,

    /// The 3 part user ID used by Peanut Labs ("userId" parameter)
    pub pl_user_id: String,

    /// Dollar amount earned by the publisher
    pub amount: f64,

    /// Raw status code; see `transaction_status`
    pub status: String,

    /// Transaction ID in the Peanut Labs system, used for support follow-up
    /// and as the deduplication key
    pub transaction_id: String,

    /// Amount of virtual currency earned by the user
    pub currency_amount: f64,

    /// Name of the currency in the publisher's system
    pub currency_name: String,

    /// Which currency the user earned, when several are configured
    pub program: String,

    pub offer: Offer,
}

impl RewardNotification {
    /// Interprets the raw status code. Returns `None` for codes outside C/F/P.
    pub fn transaction_status(&self) -> Option<TransactionStatus> {
        TransactionStatus::parse(&self.status)
    }
}
