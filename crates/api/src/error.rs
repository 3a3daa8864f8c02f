use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Credentials cannot be sent as a header: {0}")]
    InvalidCredentials(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid response format: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("At least one field (summary or description) must be updated.")]
    NothingToUpdate,
}

impl ApiError {
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ApiError::RequestFailed(err) if err.is_connect() => {
                Some("Check your network connection and the configured base URL")
            }
            ApiError::InvalidUrl(_) => Some("Run setup again to correct the base URL"),
            ApiError::InvalidCredentials(_) => Some("Run setup again to re-enter your credentials"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_suggestion() {
        let err = ApiError::from(url::Url::parse("not a url").unwrap_err());
        assert!(err.to_string().starts_with("Invalid URL"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_nothing_to_update_message() {
        let err = ApiError::NothingToUpdate;
        assert_eq!(
            err.to_string(),
            "At least one field (summary or description) must be updated."
        );
        assert!(err.suggestion().is_none());
    }
}
