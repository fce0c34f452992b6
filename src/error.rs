use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaginatorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginatorError {
    #[error("{field} cannot be less than {minimum} (got {value})")]
    InvalidConfiguration {
        field: &'static str,
        value: i64,
        minimum: i64,
    },
}
