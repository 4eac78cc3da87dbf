//! Uniform response envelope.
//!
//! Every response body, success or failure, has the shape
//! `{"status": <code>, "message": <label>, "data": {"data": <payload>}}`
//! where `status` repeats the HTTP status code.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Label for successful responses.
pub const SUCCESS: &str = "success";
/// Label for the create response.
pub const CREATED: &str = "Success";
/// Label for error responses.
pub const ERROR: &str = "error";

/// Inner payload wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeData<T> {
    /// The payload proper.
    pub data: T,
}

/// Response envelope shared by every endpoint.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use users_api::inbound::http::envelope::Envelope;
///
/// let envelope = Envelope::error(StatusCode::NOT_FOUND, "User with specified ID not found!");
/// assert_eq!(envelope.status, 404);
/// assert_eq!(envelope.message, "error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// `success`, `Success` or `error`.
    pub message: String,
    /// Wrapped payload.
    pub data: EnvelopeData<T>,
}

impl<T> Envelope<T> {
    fn build(status: StatusCode, message: &str, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: message.to_owned(),
            data: EnvelopeData { data },
        }
    }

    /// `200 OK` carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::build(StatusCode::OK, SUCCESS, data)
    }

    /// `201 Created` carrying `data`.
    pub fn created(data: T) -> Self {
        Self::build(StatusCode::CREATED, CREATED, data)
    }

    /// The status code the envelope is sent with.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Envelope<String> {
    /// Error envelope carrying a description string.
    pub fn error(status: StatusCode, description: impl Into<String>) -> Self {
        Self::build(status, ERROR, description.into())
    }
}

impl<T: Serialize> Envelope<T> {
    /// Render the envelope with its own status code.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self)
    }
}

impl<T: Serialize> Responder for Envelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response()
    }
}
