use thiserror::Error;

pub type PcdResult<T> = Result<T, PcdError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
