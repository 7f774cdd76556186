//! Peanut Labs reward callback.

use std::sync::Arc;

use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use peanutlabs_sdk::CallbackQuery;

use crate::{
    adapters::http::app_state::AppState,
    use_cases::reward::{CallbackOutcome, RewardUseCases},
};

/// GET {callback_path}?transactionId=...&oidHash=...&txnHash=...
///
/// Replies with the plain-text acknowledgement Peanut Labs expects: "1" once the
/// reward is recorded, "0" to have it re-delivered. Forged callbacks get 403.
async fn reward_callback(
    State(reward_use_cases): State<Arc<RewardUseCases>>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let params = CallbackQuery::parse(query.as_deref().unwrap_or_default());

    let outcome = reward_use_cases.handle_callback(&params).await;

    let status = match outcome {
        CallbackOutcome::Rejected => StatusCode::FORBIDDEN,
        _ => StatusCode::OK,
    };

    (status, outcome.response().as_body())
}

pub(crate) fn router(callback_path: &str) -> Router<AppState> {
    let path = if callback_path.starts_with('/') {
        callback_path.to_string()
    } else {
        format!("/{callback_path}")
    };

    Router::new().route(&path, get(reward_callback))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum_test::TestServer;
    use peanutlabs_sdk::RewardNotification;

    use super::*;
    use crate::app_error::{AppError, AppResult};
    use crate::test_utils::{
        TEST_CALLBACK_PATH, VALID_CALLBACK_QUERY, create_test_app_state,
        create_test_app_state_with_ledger,
    };
    use crate::use_cases::reward::{LedgerOutcome, RewardLedger};

    fn build_test_router(app_state: AppState) -> Router<()> {
        router(TEST_CALLBACK_PATH).with_state(app_state)
    }

    fn callback_url(query: &str) -> String {
        format!("{TEST_CALLBACK_PATH}?{query}")
    }

    #[tokio::test]
    async fn valid_callback_returns_1_and_records_reward() {
        let (app_state, ledger) = create_test_app_state();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get(&callback_url(VALID_CALLBACK_QUERY)).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("1");

        let reward = ledger.get("456").await.unwrap();
        assert_eq!(reward.amount, 1.0);
        assert_eq!(reward.currency_amount, 50.0);
        assert_eq!(reward.offer.id, "123");
        assert_eq!(reward.end_user_id, "saad");
    }

    #[tokio::test]
    async fn redelivered_callback_is_acknowledged_once_recorded() {
        let (app_state, ledger) = create_test_app_state();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        server.get(&callback_url(VALID_CALLBACK_QUERY)).await.assert_text("1");
        server.get(&callback_url(VALID_CALLBACK_QUERY)).await.assert_text("1");

        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn screenout_is_acknowledged_and_recorded() {
        let (app_state, ledger) = create_test_app_state();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let query = VALID_CALLBACK_QUERY.replace("status=C", "status=P");
        let response = server.get(&callback_url(&query)).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("1");
        assert_eq!(ledger.get("456").await.unwrap().status, "P");
    }

    #[tokio::test]
    async fn tampered_hash_returns_403() {
        let (app_state, ledger) = create_test_app_state();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let query = VALID_CALLBACK_QUERY.replace("oidHash=4", "oidHash=5");
        let response = server.get(&callback_url(&query)).await;

        response.assert_status(StatusCode::FORBIDDEN);
        response.assert_text("0");
        assert!(ledger.is_empty().await);
    }

    #[tokio::test]
    async fn missing_query_returns_403() {
        let (app_state, _ledger) = create_test_app_state();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get(TEST_CALLBACK_PATH).await;

        response.assert_status(StatusCode::FORBIDDEN);
        response.assert_text("0");
    }

    #[tokio::test]
    async fn malformed_amount_returns_0() {
        let (app_state, ledger) = create_test_app_state();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let query = VALID_CALLBACK_QUERY.replace("&amt=1.0", "");
        let response = server.get(&callback_url(&query)).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("0");
        assert!(ledger.is_empty().await);
    }

    struct FailingLedger;

    #[async_trait]
    impl RewardLedger for FailingLedger {
        async fn record(&self, _reward: &RewardNotification) -> AppResult<LedgerOutcome> {
            Err(AppError::Ledger("connection reset".into()))
        }
    }

    #[tokio::test]
    async fn ledger_failure_returns_0() {
        let app_state = create_test_app_state_with_ledger(Arc::new(FailingLedger));
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get(&callback_url(VALID_CALLBACK_QUERY)).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("0");
    }

    #[test]
    fn router_accepts_path_without_leading_slash() {
        // Would panic inside axum if the path were passed through unchanged
        let (app_state, _ledger) = create_test_app_state();
        let _ = router("peanutlabs/callback").with_state::<()>(app_state);
    }
}
