//! Request-body extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor for create/update payloads.
///
/// Wraps [`axum::Json`] so that a malformed body — missing required
/// field, out-of-domain enum value, syntax error — surfaces as a 400
/// validation error with the usual JSON error body, instead of axum's
/// default 422 with a plain-text one.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(motordesk_core::error::CoreError::Validation(
            rejection.body_text(),
        ))
    }
}
