use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Food not found: {0}")]
    FoodNotFound(u64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("API returned status {status} for {path}")]
    Api { status: u16, path: String },

    #[error("An order submission is already in flight")]
    SubmissionInFlight,
}

pub type Result<T> = std::result::Result<T, OrderError>;
