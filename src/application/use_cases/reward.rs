use std::sync::Arc;

use async_trait::async_trait;
use peanutlabs_sdk::{NotificationResponse, Publisher, QueryParams, RewardNotification};
use tracing::{error, info, instrument, warn};

use crate::app_error::AppResult;

/// Result of handing a verified reward to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    Recorded,
    /// The transaction ID was already recorded by an earlier delivery.
    Duplicate,
}

/// Durable store for verified rewards, keyed by transaction ID.
#[async_trait]
pub trait RewardLedger: Send + Sync {
    async fn record(&self, reward: &RewardNotification) -> AppResult<LedgerOutcome>;
}

/// What happened to a single reward callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    Credited,
    /// Recorded with a failed, screenout or unknown status. No reward is due.
    NotCredited,
    Duplicate,
    /// Hash verification failed; nothing was read or recorded.
    Rejected,
    /// Authentic callback with an unparseable amount.
    Malformed,
    LedgerFailed,
}

impl CallbackOutcome {
    /// Acknowledgement for Peanut Labs. Anything but `Success` triggers a re-delivery.
    pub fn response(&self) -> NotificationResponse {
        match self {
            Self::Credited | Self::NotCredited | Self::Duplicate => NotificationResponse::Success,
            Self::Rejected | Self::Malformed | Self::LedgerFailed => NotificationResponse::Failure,
        }
    }
}

#[derive(Clone)]
pub struct RewardUseCases {
    publisher: Arc<Publisher>,
    ledger: Arc<dyn RewardLedger>,
}

impl RewardUseCases {
    pub fn new(publisher: Arc<Publisher>, ledger: Arc<dyn RewardLedger>) -> Self {
        Self { publisher, ledger }
    }

    /// Verifies, parses and records a reward callback.
    #[instrument(skip_all)]
    pub async fn handle_callback<P>(&self, params: &P) -> CallbackOutcome
    where
        P: QueryParams + Sync + ?Sized,
    {
        let reward = match self.publisher.process_reward_notification(params) {
            Ok(reward) => reward,
            Err(e) if e.kind.is_security_rejection() => {
                warn!("Reward callback failed hash verification");
                return CallbackOutcome::Rejected;
            }
            Err(e) => {
                let partial = e.partial.as_ref();
                error!(
                    error = %e.kind,
                    transaction_id = partial.map(|p| p.transaction_id.as_str()).unwrap_or(""),
                    offer_id = partial.map(|p| p.offer.id.as_str()).unwrap_or(""),
                    "Malformed reward callback"
                );
                return CallbackOutcome::Malformed;
            }
        };

        match self.ledger.record(&reward).await {
            Ok(LedgerOutcome::Recorded) => match reward.transaction_status() {
                Some(status) if status.is_complete() => {
                    info!(
                        transaction_id = %reward.transaction_id,
                        offer_id = %reward.offer.id,
                        currency_amount = reward.currency_amount,
                        "Reward recorded"
                    );
                    CallbackOutcome::Credited
                }
                Some(status) => {
                    info!(
                        transaction_id = %reward.transaction_id,
                        offer_id = %reward.offer.id,
                        status = %status,
                        "Transaction recorded without reward"
                    );
                    CallbackOutcome::NotCredited
                }
                None => {
                    warn!(
                        transaction_id = %reward.transaction_id,
                        status = %reward.status,
                        "Transaction recorded with unknown status"
                    );
                    CallbackOutcome::NotCredited
                }
            },
            Ok(LedgerOutcome::Duplicate) => {
                info!(
                    transaction_id = %reward.transaction_id,
                    "Duplicate reward callback, already recorded"
                );
                CallbackOutcome::Duplicate
            }
            Err(e) => {
                error!(
                    error = %e,
                    transaction_id = %reward.transaction_id,
                    "Failed to record reward"
                );
                CallbackOutcome::LedgerFailed
            }
        }
    }
}
