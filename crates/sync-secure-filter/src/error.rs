use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FilterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::InvalidArgument(_) => "invalid_argument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_has_stable_code_and_message() {
        let err = FilterError::InvalidArgument("request is missing".to_string());
        assert_eq!(err.code(), "invalid_argument");
        assert_eq!(err.to_string(), "invalid argument: request is missing");
    }
}
