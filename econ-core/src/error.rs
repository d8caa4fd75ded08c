use thiserror::Error;

#[derive(Debug, Error)]
pub enum EconError {
    /// Two models or curves that must describe the same goods do not.
    #[error("mismatched products: {left} vs {right}")]
    MismatchedProducts { left: String, right: String },

    #[error("product {name} is not produced in this economy")]
    UnknownProduct { name: String },

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EconError>;
