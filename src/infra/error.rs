use peanutlabs_sdk::PeanutError;
use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include credential values.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Peanut Labs credentials rejected: {0}. Check PL_APPLICATION_ID, PL_SECURITY_KEY and PL_TRANSACTION_KEY.")]
    Credentials(#[source] PeanutError),

    #[error("Log file could not be created")]
    LogFile(#[source] std::io::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<PeanutError> for InfraError {
    fn from(e: PeanutError) -> Self {
        InfraError::Credentials(e)
    }
}
