//! HTTP error responses.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use paint_core::EstimateError;

use crate::pages;

/// A rejected estimate submission.
///
/// Carries the submitted fields so the form comes back pre-filled with
/// the error shown above it.
#[derive(Debug)]
pub struct WebError {
    pub error: EstimateError,
    pub submitted: HashMap<String, String>,
}

impl WebError {
    pub fn new(error: EstimateError, submitted: HashMap<String, String>) -> Self {
        WebError { error, submitted }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = pages::form_page(&self.submitted, Some(&self.error));
        (self.status(), Html(body)).into_response()
    }
}
