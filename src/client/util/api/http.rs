//! Thin JSON-over-HTTP helpers for the `/api` endpoints.
//!
//! Every request carries the stored bearer token when one exists. Non-2xx responses become
//! [`ApiError::Status`] with the server's [`ErrorDto`] message when the body has one.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::model::api::ErrorDto;

pub static API_BASE: &str = "/api";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("HTTP requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Builds the error for a non-2xx response from its status and raw body.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorDto>(body) {
        Ok(dto) => dto.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    };

    ApiError::Status { status, message }
}

#[cfg(feature = "web")]
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    use reqwasm::http::Request;

    let response = send(Request::get(&url(path))).await?;

    parse(response).await
}

#[cfg(feature = "web")]
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    use reqwasm::http::Request;

    let response = send(with_json(Request::post(&url(path)), body)?).await?;

    parse(response).await
}

/// Sends a PATCH, returning `None` when the server answers 204 No Content.
#[cfg(feature = "web")]
pub async fn patch<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Option<T>, ApiError> {
    use reqwasm::http::Request;

    let response = send(with_json(Request::patch(&url(path)), body)?).await?;

    if response.status() == 204 {
        return Ok(None);
    }

    parse(response).await.map(Some)
}

#[cfg(feature = "web")]
pub async fn delete(path: &str) -> Result<(), ApiError> {
    use reqwasm::http::Request;

    send(Request::delete(&url(path))).await?;

    Ok(())
}

#[cfg(feature = "web")]
fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

#[cfg(feature = "web")]
fn with_json<B: Serialize>(
    request: reqwasm::http::Request,
    body: &B,
) -> Result<reqwasm::http::Request, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(request.header("Content-Type", "application/json").body(body))
}

#[cfg(feature = "web")]
async fn send(request: reqwasm::http::Request) -> Result<reqwasm::http::Response, ApiError> {
    use crate::client::util::storage;

    let request = match storage::load_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let status = response.status();
    if (200..300).contains(&status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(status_error(status, &body))
}

#[cfg(feature = "web")]
async fn parse<T: DeserializeOwned>(response: reqwasm::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(not(feature = "web"))]
pub async fn get<T: DeserializeOwned>(_path: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "web"))]
pub async fn post<B: Serialize, T: DeserializeOwned>(
    _path: &str,
    _body: &B,
) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "web"))]
pub async fn patch<B: Serialize, T: DeserializeOwned>(
    _path: &str,
    _body: &B,
) -> Result<Option<T>, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "web"))]
pub async fn delete(_path: &str) -> Result<(), ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_error_dto_message() {
        let err = status_error(403, r#"{"error":"Battle team is full"}"#);

        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                message: "Battle team is full".to_string()
            }
        );
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let err = status_error(502, "Bad Gateway");

        assert!(matches!(err, ApiError::Status { message, .. } if message == "Bad Gateway"));
    }

    #[test]
    fn status_error_with_empty_body() {
        let err = status_error(500, "");

        assert!(matches!(err, ApiError::Status { message, .. } if message == "Unknown error"));
    }
}
