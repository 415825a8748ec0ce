//! Router construction and request handlers.
//!
//! - `GET /`  - blank estimate form
//! - `POST /` - price the submitted form and render the estimate

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use paint_core::{calculate, Clock, EstimateRequest};
use tower_http::trace::TraceLayer;

use crate::error::WebError;
use crate::pages;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    pub fn new(clock: impl Clock + Send + Sync + 'static) -> Self {
        AppState { clock: Arc::new(clock) }
    }
}

/// Build the full axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_estimate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_form() -> Html<String> {
    Html(pages::form_page(&HashMap::new(), None))
}

async fn submit_estimate(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, WebError> {
    let priced = EstimateRequest::from_fields(&fields)
        .and_then(|request| calculate(&request.input, state.clock.as_ref()).map(|result| (request, result)));

    match priced {
        Ok((request, result)) => {
            tracing::info!(
                condition = %result.job_details.condition,
                paint_quality = %result.job_details.paint_quality,
                paintable_area = result.room_info.paintable_area,
                gallons = result.materials.gallons_needed,
                total = result.totals.total,
                "Estimate prepared"
            );
            Ok(Html(pages::estimate_page(&result, &request.customer)))
        }
        Err(error) => {
            tracing::warn!(code = error.error_code(), field = ?error.field(), "Rejected estimate request: {}", error);
            Err(WebError::new(error, fields))
        }
    }
}
