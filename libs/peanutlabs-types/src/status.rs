use serde::{Deserialize, Serialize};

/// Transaction status codes sent in the `status` callback parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Successfully completed action
    #[serde(rename = "C")]
    Complete,

    /// Quality check failure or over quota
    #[serde(rename = "F")]
    Failed,

    /// Disqualified from a survey
    #[serde(rename = "P")]
    Screenout,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "C",
            Self::Failed => "F",
            Self::Screenout => "P",
        }
    }

    /// Maps a raw status code onto a known status. Codes are case-sensitive.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Self::Complete),
            "F" => Some(Self::Failed),
            "P" => Some(Self::Screenout),
            _ => None,
        }
    }

    /// Returns true if the user should be credited.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown transaction status: {s}"))
    }
}

/// Offer types sent in the `offerType` callback parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    /// CPA offer
    Offer,
    Survey,
}

impl OfferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Survey => "survey",
        }
    }

    /// Matches case-insensitively; the network has been observed sending "Survey".
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("offer") {
            Some(Self::Offer)
        } else if value.eq_ignore_ascii_case("survey") {
            Some(Self::Survey)
        } else {
            None
        }
    }
}

impl std::fmt::Display for OfferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Acknowledgement body expected by Peanut Labs in response to a callback.
///
/// On `Failure` the network re-notifies, up to 5 attempts in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationResponse {
    Success = 1,
    Failure = 0,
}

impl NotificationResponse {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Body to write in the HTTP response ("1" or "0").
    pub fn as_body(&self) -> &'static str {
        match self {
            Self::Success => "1",
            Self::Failure => "0",
        }
    }
}
