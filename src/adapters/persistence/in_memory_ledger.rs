use std::collections::HashMap;

use async_trait::async_trait;
use peanutlabs_sdk::RewardNotification;
use tokio::sync::RwLock;

use crate::{
    app_error::AppResult,
    use_cases::reward::{LedgerOutcome, RewardLedger},
};

/// Process-local reward ledger. Deduplicates on transaction ID.
///
/// Contents are lost on restart; swap in a database-backed `RewardLedger`
/// for production use.
#[derive(Default)]
pub struct InMemoryRewardLedger {
    rewards: RwLock<HashMap<String, RewardNotification>>,
}

impl InMemoryRewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, transaction_id: &str) -> Option<RewardNotification> {
        self.rewards.read().await.get(transaction_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rewards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rewards.read().await.is_empty()
    }
}

#[async_trait]
impl RewardLedger for InMemoryRewardLedger {
    async fn record(&self, reward: &RewardNotification) -> AppResult<LedgerOutcome> {
        let mut rewards = self.rewards.write().await;
        if rewards.contains_key(&reward.transaction_id) {
            return Ok(LedgerOutcome::Duplicate);
        }
        rewards.insert(reward.transaction_id.clone(), reward.clone());
        Ok(LedgerOutcome::Recorded)
    }
}
