use thiserror::Error;

/// Errors raised by the Peanut Labs integration primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeanutError {
    #[error("Invalid Application ID")]
    InvalidApplicationId,

    #[error("Invalid Security Key")]
    InvalidSecurityKey,

    #[error("Invalid Transaction Key")]
    InvalidTransactionKey,

    #[error("Invalid EndUserID")]
    InvalidEndUserId,

    /// Either the offer hash or the transaction hash did not match.
    /// Which one is intentionally not reported.
    #[error("Invalid Hash for the reward notification")]
    InvalidCallbackSignature,

    #[error("Invalid Amount in callback")]
    InvalidAmount,

    #[error("Invalid Currency Amount in callback")]
    InvalidCurrencyAmount,
}

impl PeanutError {
    /// Returns true for errors raised while validating publisher credentials.
    /// The integration object cannot be used after one of these.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidApplicationId | Self::InvalidSecurityKey | Self::InvalidTransactionKey
        )
    }

    /// Returns true when a callback failed authentication and must be rejected
    /// without crediting anything.
    pub fn is_security_rejection(&self) -> bool {
        matches!(self, Self::InvalidCallbackSignature)
    }

    /// Returns true when an authenticated callback carried malformed data.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::InvalidAmount | Self::InvalidCurrencyAmount)
    }
}
