//! Peanut Labs publisher implementation.

use peanutlabs_types::{
    PeanutError, PeanutUserId, RewardNotification, generate_user_id, verify_callback_hashes,
};
use url::form_urlencoded;

use crate::error::NotificationError;
use crate::notification::{keys, parse_notification};
use crate::params::QueryParams;

/// Default Peanut Labs host for the Reward Center.
pub const DEFAULT_HOST: &str = "https://www.peanutlabs.com";

/// Publisher credentials and entry point for the integration.
///
/// Validated on construction and immutable afterwards. Cheap to clone and
/// safe to share between threads.
#[derive(Clone)]
pub struct Publisher {
    application_id: u64,
    security_key: String,
    transaction_key: String,
    host: String,
}

impl Publisher {
    /// Create a new publisher.
    ///
    /// # Arguments
    /// * `application_id` - Application ID from the Peanut Labs dashboard
    /// * `security_key` - Key used for user IDs and offer hashes
    /// * `transaction_key` - Key used for transaction hashes
    ///
    /// # Returns
    /// A configured `Publisher`, or the first credential that is invalid.
    pub fn new(
        application_id: u64,
        security_key: impl Into<String>,
        transaction_key: impl Into<String>,
    ) -> Result<Self, PeanutError> {
        let security_key = security_key.into();
        let transaction_key = transaction_key.into();

        if application_id == 0 {
            return Err(PeanutError::InvalidApplicationId);
        }

        if security_key.is_empty() {
            return Err(PeanutError::InvalidSecurityKey);
        }

        if transaction_key.is_empty() {
            return Err(PeanutError::InvalidTransactionKey);
        }

        Ok(Self {
            application_id,
            security_key,
            transaction_key,
            host: DEFAULT_HOST.to_string(),
        })
    }

    /// Use a different Reward Center host (e.g. a sandbox). A trailing `/` is dropped.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn application_id(&self) -> u64 {
        self.application_id
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the 3 part user ID expected by the Reward Center and other products.
    pub fn generate_user_id(&self, end_user_id: &str) -> Result<PeanutUserId, PeanutError> {
        generate_user_id(end_user_id, self.application_id, &self.security_key)
    }

    /// Returns the Reward Center URL for one of the publisher's users.
    ///
    /// The user ID is form-encoded into the query, so IDs made of
    /// alphanumerics, `-`, `_` and `.` appear unchanged.
    ///
    /// # Example
    /// ```
    /// use peanutlabs_sdk::Publisher;
    ///
    /// let publisher = Publisher::new(1, "123", "123").unwrap();
    /// assert_eq!(
    ///     publisher.reward_center_url("saad").unwrap(),
    ///     "https://www.peanutlabs.com/userGreeting.php?userId=saad-1-bb753c1132"
    /// );
    /// ```
    pub fn reward_center_url(&self, end_user_id: &str) -> Result<String, PeanutError> {
        let uid = self.generate_user_id(end_user_id)?;
        let encoded: String = form_urlencoded::byte_serialize(uid.as_str().as_bytes()).collect();
        Ok(format!("{}/userGreeting.php?userId={encoded}", self.host))
    }

    /// Checks the `oidHash` and `txnHash` parameters of a callback.
    ///
    /// Returns `InvalidCallbackSignature` if either one is wrong, without
    /// saying which.
    pub fn verify_notification<P: QueryParams + ?Sized>(
        &self,
        params: &P,
    ) -> Result<(), PeanutError> {
        let authentic = verify_callback_hashes(
            params.get_param(keys::OFFER_INVITATION_ID).unwrap_or_default(),
            params.get_param(keys::TRANSACTION_ID).unwrap_or_default(),
            params.get_param(keys::OID_HASH).unwrap_or_default(),
            params.get_param(keys::TXN_HASH).unwrap_or_default(),
            &self.security_key,
            &self.transaction_key,
        );

        if authentic {
            Ok(())
        } else {
            Err(PeanutError::InvalidCallbackSignature)
        }
    }

    /// Verifies and parses a reward notification.
    ///
    /// Nothing beyond the hashed IDs is read until both hashes check out.
    /// Acknowledge with `NotificationResponse::Success` only after the reward
    /// has been stored, and deduplicate on `transaction_id`, since the
    /// network re-delivers on failure.
    ///
    /// # Example
    /// ```rust,ignore
    /// let query = CallbackQuery::parse(request.uri().query().unwrap_or(""));
    /// match publisher.process_reward_notification(&query) {
    ///     Ok(reward) => credit(reward),
    ///     Err(e) if e.kind.is_security_rejection() => reject(),
    ///     Err(e) => log_malformed(e.partial),
    /// }
    /// ```
    pub fn process_reward_notification<P: QueryParams + ?Sized>(
        &self,
        params: &P,
    ) -> Result<RewardNotification, NotificationError> {
        self.verify_notification(params)
            .map_err(|_| NotificationError::rejected())?;

        parse_notification(params)
    }
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("application_id", &self.application_id)
            .field("security_key", &"[REDACTED]")
            .field("transaction_key", &"[REDACTED]")
            .field("host", &self.host)
            .finish()
    }
}
