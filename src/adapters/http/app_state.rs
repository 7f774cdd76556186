use std::sync::Arc;

use axum::extract::FromRef;

use crate::{infra::config::AppConfig, use_cases::reward::RewardUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub reward_use_cases: Arc<RewardUseCases>,
}

impl FromRef<AppState> for Arc<RewardUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.reward_use_cases.clone()
    }
}
