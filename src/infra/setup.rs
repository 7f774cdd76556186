use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::InMemoryRewardLedger},
    infra::{config::AppConfig, error::InfraError},
    use_cases::reward::{RewardLedger, RewardUseCases},
};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let publisher = Arc::new(config.publisher()?);

    let ledger = Arc::new(InMemoryRewardLedger::new()) as Arc<dyn RewardLedger>;

    let reward_use_cases = RewardUseCases::new(publisher, ledger);

    Ok(AppState {
        config: Arc::new(config),
        reward_use_cases: Arc::new(reward_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "peanutlabs_callback=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
