//! Reward notification parsing.

use peanutlabs_types::{PeanutError, RewardNotification};

use crate::error::NotificationError;
use crate::params::{QueryParams, param_or_empty};

/// Callback parameter names, fixed by the Peanut Labs protocol.
pub mod keys {
    pub const TRANSACTION_ID: &str = "transactionId";
    pub const OFFER_INVITATION_ID: &str = "offerInvitationId";
    pub const OID_HASH: &str = "oidHash";
    pub const TXN_HASH: &str = "txnHash";
    pub const AMOUNT: &str = "amt";
    pub const OFFER_TITLE: &str = "offerTitle";
    pub const OFFER_TYPE: &str = "offerType";
    pub const STATUS: &str = "status";
    pub const PROGRAM: &str = "program";
    pub const CURRENCY_NAME: &str = "currencyName";
    pub const CURRENCY_AMOUNT: &str = "currencyAmt";
    pub const USER_ID: &str = "userId";
    pub const END_USER_ID: &str = "endUserId";
}

/// Parse a decimal amount. Missing, empty and non-finite values are rejected.
fn parse_amount(raw: Option<&str>) -> Option<f64> {
    raw?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the notification fields of a callback whose hashes were already verified.
///
/// String fields are copied verbatim; a missing key reads as "". The status is
/// not checked against the known codes.
///
/// Fields are read in a fixed order. If `amt` or `currencyAmt` cannot be
/// parsed, the error carries everything read up to that point.
pub fn parse_notification<P: QueryParams + ?Sized>(
    params: &P,
) -> Result<RewardNotification, NotificationError> {
    let mut rn = RewardNotification::default();
    rn.transaction_id = param_or_empty(params, keys::TRANSACTION_ID);
    rn.offer.id = param_or_empty(params, keys::OFFER_INVITATION_ID);

    rn.amount = match parse_amount(params.get_param(keys::AMOUNT)) {
        Some(amount) => amount,
        None => return Err(NotificationError::malformed(PeanutError::InvalidAmount, rn)),
    };

    rn.offer.title = param_or_empty(params, keys::OFFER_TITLE);
    rn.offer.kind = param_or_empty(params, keys::OFFER_TYPE);

    rn.status = param_or_empty(params, keys::STATUS);
    rn.program = param_or_empty(params, keys::PROGRAM);
    rn.currency_name = param_or_empty(params, keys::CURRENCY_NAME);
    rn.currency_amount = match parse_amount(params.get_param(keys::CURRENCY_AMOUNT)) {
        Some(amount) => amount,
        None => {
            return Err(NotificationError::malformed(
                PeanutError::InvalidCurrencyAmount,
                rn,
            ));
        }
    };

    rn.pl_user_id = param_or_empty(params, keys::USER_ID);
    rn.end_user_id = param_or_empty(params, keys::END_USER_ID);

    Ok(rn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallbackQuery;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some("1.0")), Some(1.0));
        assert_eq!(parse_amount(Some("50")), Some(50.0));
        assert_eq!(parse_amount(Some("-0.25")), Some(-0.25));
        assert_eq!(parse_amount(Some("1e2")), Some(100.0));
        assert_eq!(parse_amount(Some("")), None);
        assert_eq!(parse_amount(Some("1,5")), None);
        assert_eq!(parse_amount(Some("abc")), None);
        assert_eq!(parse_amount(Some(" 1.0")), None);
        assert_eq!(parse_amount(Some("NaN")), None);
        assert_eq!(parse_amount(Some("inf")), None);
        assert_eq!(parse_amount(None), None);
    }

    #[test]
    fn test_parse_missing_strings_are_empty() {
        let query = CallbackQuery::parse("amt=2.5&currencyAmt=10");
        let rn = parse_notification(&query).unwrap();

        assert_eq!(rn.amount, 2.5);
        assert_eq!(rn.currency_amount, 10.0);
        assert_eq!(rn.transaction_id, "");
        assert_eq!(rn.offer.id, "");
        assert_eq!(rn.status, "");
        assert_eq!(rn.end_user_id, "");
    }

    #[test]
    fn test_parse_does_not_validate_status() {
        let query = CallbackQuery::parse("amt=1&currencyAmt=1&status=ZZ");
        let rn = parse_notification(&query).unwrap();

        assert_eq!(rn.status, "ZZ");
        assert_eq!(rn.transaction_status(), None);
    }

    #[test]
    fn test_invalid_amount_partial_record() {
        let query = CallbackQuery::parse(
            "transactionId=456&offerInvitationId=123&amt=oops&offerTitle=Survey&currencyAmt=50",
        );
        let err = parse_notification(&query).unwrap_err();

        assert_eq!(err.kind, PeanutError::InvalidAmount);
        let partial = err.partial.unwrap();
        assert_eq!(partial.transaction_id, "456");
        assert_eq!(partial.offer.id, "123");
        // Nothing past `amt` is read
        assert_eq!(partial.offer.title, "");
        assert_eq!(partial.currency_amount, 0.0);
    }

    #[test]
    fn test_invalid_currency_amount_partial_record() {
        let query = CallbackQuery::parse(
            "transactionId=456&offerInvitationId=123&amt=1.0&offerTitle=Survey&status=C&currencyName=Pointies&userId=u&endUserId=e",
        );
        let err = parse_notification(&query).unwrap_err();

        assert_eq!(err.kind, PeanutError::InvalidCurrencyAmount);
        let partial = err.partial.unwrap();
        assert_eq!(partial.transaction_id, "456");
        assert_eq!(partial.amount, 1.0);
        assert_eq!(partial.offer.title, "Survey");
        assert_eq!(partial.status, "C");
        assert_eq!(partial.currency_name, "Pointies");
        // Read after `currencyAmt`
        assert_eq!(partial.pl_user_id, "");
        assert_eq!(partial.end_user_id, "");
    }
}
