use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pm10dash_core::DensityError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<DensityError> for ApiError {
    fn from(err: DensityError) -> Self {
        match &err {
            DensityError::Http { .. } | DensityError::HttpStatus { .. } => {
                Self::bad_gateway("Upstream data source unavailable").with_details(err.to_string())
            }
            DensityError::InvalidGeoJson { .. } => {
                Self::bad_gateway("Upstream returned invalid GeoJSON").with_details(err.to_string())
            }
            DensityError::CorruptCache { .. } => {
                Self::internal("Cached boundary file is corrupt; delete it to download again")
                    .with_details(err.to_string())
            }
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_map_to_bad_gateway() {
        let err: ApiError = DensityError::HttpStatus {
            url: "https://stations.test".to_string(),
            status: 503,
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(err.details.unwrap().contains("503"));
    }

    #[test]
    fn test_corrupt_cache_file_is_internal_error() {
        let err: ApiError = DensityError::CorruptCache {
            path: "countries.geojson".to_string(),
            reason: "EOF while parsing".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.starts_with("Cached boundary file is corrupt"));
        assert!(err.details.unwrap().contains("countries.geojson"));
    }

    #[test]
    fn test_io_errors_map_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ApiError = DensityError::Io(io).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
