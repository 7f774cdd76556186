//! Callback parameter access.

use std::collections::{BTreeMap, HashMap};

use url::form_urlencoded;

/// Trait for reading callback query parameters in a framework-agnostic way.
///
/// Implement this trait for your framework's query type to use
/// `Publisher::process_reward_notification()`. Keys are case-sensitive.
///
/// # Example
///
/// ```rust,ignore
/// use peanutlabs_sdk::QueryParams;
///
/// struct ActixQuery(actix_web::web::Query<HashMap<String, String>>);
///
/// impl QueryParams for ActixQuery {
///     fn get_param(&self, key: &str) -> Option<&str> {
///         self.0.get(key).map(String::as_str)
///     }
/// }
/// ```
pub trait QueryParams {
    /// Get the value for a parameter, or None if it was not sent.
    fn get_param(&self, key: &str) -> Option<&str>;
}

impl QueryParams for HashMap<String, String> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<P: QueryParams + ?Sized> QueryParams for &P {
    fn get_param(&self, key: &str) -> Option<&str> {
        (**self).get_param(key)
    }
}

/// Parameters decoded from a raw `application/x-www-form-urlencoded` query string.
///
/// Percent-escapes and `+` are decoded. If a key repeats, the first value wins.
#[derive(Debug, Clone, Default)]
pub struct CallbackQuery {
    pairs: Vec<(String, String)>,
}

impl CallbackQuery {
    /// Parse a query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Number of decoded key/value pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl QueryParams for CallbackQuery {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl std::str::FromStr for CallbackQuery {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Read a parameter, treating a missing key as an empty string.
pub(crate) fn param_or_empty<P: QueryParams + ?Sized>(params: &P, key: &str) -> String {
    params.get_param(key).unwrap_or_default().to_string()
}
