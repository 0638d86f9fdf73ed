//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::DirectoryError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Map a problem received from a remote directory back to a domain error
    pub fn into_domain_error(self) -> DirectoryError {
        let detail = self.detail.unwrap_or(self.title);
        match StatusCode::from_u16(self.status) {
            Ok(StatusCode::BAD_REQUEST) | Ok(StatusCode::UNPROCESSABLE_ENTITY) => {
                DirectoryError::validation(detail)
            }
            Ok(StatusCode::CONFLICT) => DirectoryError::conflict(detail),
            Ok(StatusCode::NOT_FOUND) => DirectoryError::NotFound {
                resource: "resource".to_string(),
                id: self.instance.unwrap_or_default(),
            },
            _ => DirectoryError::Internal,
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: DirectoryError) -> Problem {
    match error {
        DirectoryError::NotFound { resource, id } => Problem::new(
            StatusCode::NOT_FOUND,
            format!("{} Not Found", resource),
        )
        .with_detail(format!("{} with id '{}' was not found", resource, id)),

        DirectoryError::Conflict { reason } => {
            Problem::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
        }

        DirectoryError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        DirectoryError::Internal => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("An unexpected error occurred"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (DirectoryError::validation("bad"), 400),
            (DirectoryError::conflict("taken"), 409),
            (
                DirectoryError::NotFound {
                    resource: "Company".to_string(),
                    id: "x".to_string(),
                },
                404,
            ),
            (DirectoryError::Internal, 500),
        ];

        for (error, status) in cases {
            assert_eq!(map_domain_error(error).status, status);
        }
    }

    #[test]
    fn internal_problem_hides_the_cause() {
        let problem = map_domain_error(DirectoryError::Internal);
        assert_eq!(problem.detail.as_deref(), Some("An unexpected error occurred"));
    }

    #[test]
    fn problems_map_back_to_domain_errors() {
        let problem = map_domain_error(DirectoryError::conflict("company id already exists: a"));
        assert_eq!(
            problem.into_domain_error(),
            DirectoryError::conflict("company id already exists: a")
        );

        let problem = Problem::new(StatusCode::BAD_GATEWAY, "Bad Gateway");
        assert_eq!(problem.into_domain_error(), DirectoryError::Internal);
    }

    #[test]
    fn response_carries_problem_content_type() {
        let response = map_domain_error(DirectoryError::validation("bad")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(PROBLEM_CONTENT_TYPE.as_bytes())
        );
    }
}
