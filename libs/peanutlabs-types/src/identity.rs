use serde::Serialize;

use crate::{PeanutError, keyed_checksum};

/// Longest end-user ID Peanut Labs accepts, in characters.
pub const MAX_END_USER_ID_LEN: usize = 200;

/// Number of checksum hex characters embedded in the user ID.
const CHECKSUM_LEN: usize = 10;

/// The 3 part user ID expected by the Reward Center:
/// `{end_user_id}-{application_id}-{checksum}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PeanutUserId(String);

impl PeanutUserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PeanutUserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PeanutUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true if the end-user ID is non-empty and at most 200 characters.
///
/// The limit counts Unicode characters, not bytes. Peanut Labs' own libraries
/// count bytes, so a multi-byte ID such as `"é".repeat(200)` passes here but
/// would be refused there.
pub fn validate_end_user_id(end_user_id: &str) -> bool {
    !end_user_id.is_empty() && end_user_id.chars().count() <= MAX_END_USER_ID_LEN
}

/// Generates the Peanut Labs user ID for one of the publisher's users.
///
/// The checksum is the first 10 hex characters of
/// `md5(end_user_id ‖ application_id ‖ security_key)`.
///
/// # Example
/// ```
/// use peanutlabs_types::generate_user_id;
///
/// let uid = generate_user_id("saad", 1, "123").unwrap();
/// assert_eq!(uid.as_str(), "saad-1-bb753c1132");
/// ```
pub fn generate_user_id(
    end_user_id: &str,
    application_id: u64,
    security_key: &str,
) -> Result<PeanutUserId, PeanutError> {
    if !validate_end_user_id(end_user_id) {
        return Err(PeanutError::InvalidEndUserId);
    }

    let app_id = application_id.to_string();
    let checksum = keyed_checksum(&[end_user_id, &app_id, security_key]);

    Ok(PeanutUserId(format!(
        "{}-{}-{}",
        end_user_id,
        app_id,
        &checksum[..CHECKSUM_LEN]
    )))
}
