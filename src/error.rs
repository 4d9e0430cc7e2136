use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("No payment strategy configured")]
    NoStrategy,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Plan error: {0}")]
    PlanError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
