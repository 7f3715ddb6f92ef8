use actix_web::{
    Error, HttpRequest, HttpResponse, ResponseError,
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::{
        Method, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::Next,
    web,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::storage::StorageError;

/// Body of every failed request.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({ "Error": "employee 7 not found" }))]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("employee {0} not found")]
    NotFound(i32),

    #[error("method doesn't exist: {0}")]
    MethodNotAllowed(Method),

    #[error("too many requests")]
    TooManyRequests,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Storage(StorageError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Storage(StorageError::Timeout(_)) => {
                error!(error = %self, "Storage timed out");
                "Storage did not respond in time".to_string()
            }
            ApiError::Storage(e) => {
                error!(error = %e, "Storage failure");
                "Something went wrong, Contact with system admin".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
    }
}

// Extractor failures go through the same body as handler failures.

/// Bodies are decoded as JSON whatever the `Content-Type` says, or when it is missing.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(format!("invalid JSON: {err}")).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err: PathError, req: &HttpRequest| {
        let raw = req.match_info().get("id").unwrap_or_default();
        ApiError::BadRequest(format!("invalid employee id: {raw:?}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(format!("invalid query: {err}")).into()
    })
}

/// Rewrites the rate limiter's plain-text 429 into the JSON error body.
/// Must wrap outside the limiter.
pub async fn rate_limit_as_json(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let http_req = req.request().clone();

    match next.call(req).await {
        Ok(res) if res.status() == StatusCode::TOO_MANY_REQUESTS => {
            let limited = too_many_requests(res.response().headers());
            Ok(res.into_response(limited))
        }
        Ok(res) => Ok(res.map_into_boxed_body()),
        Err(err) if err.as_response_error().status_code() == StatusCode::TOO_MANY_REQUESTS => {
            let limited = too_many_requests(err.error_response().headers());
            Ok(ServiceResponse::new(http_req, limited))
        }
        Err(err) => Err(err),
    }
}

// Keeps the limiter's retry headers.
fn too_many_requests(original: &actix_web::http::header::HeaderMap) -> HttpResponse {
    let mut resp = ApiError::TooManyRequests.error_response();
    for (name, value) in original {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            resp.headers_mut().insert(name.clone(), value.clone());
        }
    }
    resp
}
