use thiserror::Error;

pub type FkResult<T> = Result<T, FkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Configuration error: {what}")]
    Configuration { what: String },
}
