//! Error type for TMDB requests

use marquee_core::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure from reqwest (DNS, timeout, TLS, ...).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status from the API.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not deserialize into the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collapse an [`ApiError`] into the cloneable per-query failure the
/// coordinator tracks. Only a 404 is distinguished; everything else is an
/// opaque "fetch failed" with the status and message kept for logging.
impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api { status: 404, .. } => FetchError::NotFound,
            ApiError::Api { status, message } => FetchError::Upstream { status, message },
            ApiError::Json(e) => FetchError::decode(e.to_string()),
            ApiError::Request(e) => FetchError::network(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_maps_to_not_found() {
        let err = ApiError::Api {
            status: 404,
            message: "The resource you requested could not be found.".to_string(),
        };
        assert_eq!(FetchError::from(err), FetchError::NotFound);
    }

    #[test]
    fn test_non_2xx_maps_to_upstream() {
        let err = ApiError::Api {
            status: 503,
            message: "upstream down".to_string(),
        };
        match FetchError::from(err) {
            FetchError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_json_maps_to_decode() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ApiError::Json(json_err);
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
