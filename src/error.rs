use thiserror::Error;

pub type Result<T> = std::result::Result<T, QrBillError>;

#[derive(Error, Debug)]
pub enum QrBillError {
    #[error("invalid IBAN: {0}")]
    InvalidIban(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
