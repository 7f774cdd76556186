use std::sync::Arc;

use peanutlabs_sdk::Publisher;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::{http::app_state::AppState, persistence::InMemoryRewardLedger},
    infra::config::AppConfig,
    use_cases::reward::{RewardLedger, RewardUseCases},
};

pub const TEST_CALLBACK_PATH: &str = "/peanutlabs/callback";

/// Callback query for application 1 with security and transaction key "123".
pub const VALID_CALLBACK_QUERY: &str = "cmd=transactionComplete&userId=saad-1-bb753c1132\
    &amt=1.0&offerInvitationId=123&status=C&oidHash=4297f44b13955235245b2497399d7a93\
    &currencyAmt=50&transactionId=456&endUserId=saad&offerTitle=Survey\
    &useragent=Peanut+Labs+Media&currencyName=Pointies&offerType=Survey\
    &txnHash=d964173dc44da83eeafa3aebbee9a1a0&program=";

pub fn create_test_config() -> AppConfig {
    AppConfig {
        application_id: 1,
        security_key: SecretString::new("123".into()),
        transaction_key: SecretString::new("123".into()),
        host: Url::parse("https://www.peanutlabs.com").unwrap(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        callback_path: TEST_CALLBACK_PATH.to_string(),
        log_file: None,
    }
}

pub fn create_test_app_state_with_ledger(ledger: Arc<dyn RewardLedger>) -> AppState {
    let config = create_test_config();
    let publisher: Arc<Publisher> = Arc::new(config.publisher().unwrap());

    AppState {
        config: Arc::new(config),
        reward_use_cases: Arc::new(RewardUseCases::new(publisher, ledger)),
    }
}

/// App state backed by an in-memory ledger, returned alongside for assertions.
pub fn create_test_app_state() -> (AppState, Arc<InMemoryRewardLedger>) {
    let ledger = Arc::new(InMemoryRewardLedger::new());
    let app_state = create_test_app_state_with_ledger(ledger.clone());
    (app_state, ledger)
}
