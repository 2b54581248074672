// src/shared/http/api_error.rs

/// Failure of a single outbound request.
///
/// `Rejected` means the request reached the server and came back outside the
/// 2xx range. `Network` means it never completed, so there is no HTTP status
/// and `status()` reports `0`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API request failed: {status} {status_text}")]
    Rejected { status: u16, status_text: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiError::Rejected { status, .. } => *status,
            ApiError::Network { .. } | ApiError::Decode(_) => 0,
        }
    }

    pub fn status_text(&self) -> &str {
        match self {
            ApiError::Rejected { status_text, .. } => status_text,
            ApiError::Network { .. } => "Network Error",
            ApiError::Decode(_) => "Invalid Response",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_keeps_status_and_text() {
        let err = ApiError::Rejected {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };

        assert_eq!(err.status(), 503);
        assert_eq!(err.status_text(), "Service Unavailable");
        assert!(err.is_rejected());
        assert!(!err.is_network());
        assert_eq!(
            err.to_string(),
            "API request failed: 503 Service Unavailable"
        );
    }

    #[test]
    fn network_reports_status_zero() {
        let err = ApiError::network("connection refused");

        assert_eq!(err.status(), 0);
        assert_eq!(err.status_text(), "Network Error");
        assert!(err.is_network());
        assert!(!err.is_rejected());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn only_404_counts_as_not_found() {
        let missing = ApiError::Rejected {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert!(missing.is_not_found());
        assert!(!ApiError::network("boom").is_not_found());
    }
}
