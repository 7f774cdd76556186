use std::net::SocketAddr;
use std::path::PathBuf;

use env_helpers::{get_env, get_env_default};
use peanutlabs_sdk::{DEFAULT_HOST, PeanutError, Publisher};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

pub struct AppConfig {
    /// Application ID from the Peanut Labs publisher dashboard.
    pub application_id: u64,
    pub security_key: SecretString,
    pub transaction_key: SecretString,
    /// Reward Center host (e.g. "https://www.peanutlabs.com").
    pub host: Url,
    pub bind_addr: SocketAddr,
    /// Path the Peanut Labs callback is configured to hit.
    pub callback_path: String,
    /// When set, structured JSON logs are also written here.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let application_id: u64 = get_env("PL_APPLICATION_ID");
        let security_key = SecretString::new(get_env::<String>("PL_SECURITY_KEY").into());
        let transaction_key = SecretString::new(get_env::<String>("PL_TRANSACTION_KEY").into());

        let host: Url = get_env_default("PL_HOST", Url::parse(DEFAULT_HOST).unwrap());
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3002".parse().unwrap());
        let callback_path: String =
            get_env_default("CALLBACK_PATH", "/peanutlabs/callback".to_string());
        let log_file: Option<PathBuf> = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Self {
            application_id,
            security_key,
            transaction_key,
            host,
            bind_addr,
            callback_path,
            log_file,
        }
    }

    /// Builds the publisher from the configured credentials.
    pub fn publisher(&self) -> Result<Publisher, PeanutError> {
        Publisher::new(
            self.application_id,
            self.security_key.expose_secret(),
            self.transaction_key.expose_secret(),
        )
        .map(|publisher| publisher.with_host(self.host.as_str()))
    }
}
