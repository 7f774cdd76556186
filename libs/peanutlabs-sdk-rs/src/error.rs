use peanutlabs_types::{PeanutError, RewardNotification};
use thiserror::Error;

/// Failure while processing a reward notification.
///
/// When the callback was authentic but malformed, `partial` carries the fields
/// read before the failure, so the transaction can still be logged.
/// It is always `None` for `InvalidCallbackSignature`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct NotificationError {
    #[source]
    pub kind: PeanutError,
    pub partial: Option<RewardNotification>,
}

impl NotificationError {
    pub(crate) fn rejected() -> Self {
        Self {
            kind: PeanutError::InvalidCallbackSignature,
            partial: None,
        }
    }

    pub(crate) fn malformed(kind: PeanutError, partial: RewardNotification) -> Self {
        Self {
            kind,
            partial: Some(partial),
        }
    }

    /// Transaction ID of the partial record, if any.
    pub fn transaction_id(&self) -> Option<&str> {
        self.partial.as_ref().map(|p| p.transaction_id.as_str())
    }
}

impl From<NotificationError> for PeanutError {
    fn from(e: NotificationError) -> Self {
        e.kind
    }
}
