use thiserror::Error;

/// Application error types.
///
/// The taxonomy is deliberately closed: every failure a render pass can hit
/// is one of these three, and each maps to one user-visible message. "Symbol
/// not found" is not an error at the adapter level (it comes back as an empty
/// series); `NotFound` is raised once a whole pass comes up empty.
#[derive(Error, Debug)]
pub enum AppError {
    /// Every market-suffix candidate returned empty data for the symbol.
    #[error("No data found for symbol: {0}")]
    NotFound(String),

    /// Transport or provider failure: network, bad status, undecodable or
    /// schema-violating payload.
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Normalization or derived-value computation failed; the pipeline never
    /// runs on partial data, so this aborts the pass.
    #[error("Computation failed: {0}")]
    Compute(String),
}

impl AppError {
    /// Whether this is the benign "no such symbol" outcome rather than a
    /// genuine failure. The renderer shows these as plain info messages.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchFailed(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::FetchFailed(format!("Malformed provider payload: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_informational() {
        let err = AppError::NotFound("9999".to_string());
        assert!(err.is_not_found());
        assert!(err.to_string().contains("9999"));
    }

    #[test]
    fn test_fetch_failed_is_not_not_found() {
        let err = AppError::FetchFailed("connection reset".to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_serde_error_maps_to_fetch_failed() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = serde_err.into();
        assert!(matches!(err, AppError::FetchFailed(_)));
    }
}
