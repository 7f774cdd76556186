use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger error: {0}")]
    Ledger(String),
}

pub type AppResult<T> = Result<T, AppError>;
