use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::Error;
use crate::models::CategoryFilter;
use crate::web::{AppState, pages, view::ListingView};

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub category: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Misconfigured(Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Misconfigured { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

pub async fn landing_handler() -> Html<String> {
    Html(pages::landing_page(current_year()))
}

/// One fetch per request. Retrieval failures render inline; missing
/// connection settings abort the page.
pub async fn vendors_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Result<Html<String>, AppError> {
    let filter = CategoryFilter::parse(params.category.as_deref());

    let outcome = match state.vendors.listings(&filter).await {
        Err(e) if e.is_fatal() => {
            error!(error = %e, "Vendor directory is not configured");
            return Err(AppError::Misconfigured(e));
        }
        Err(e) => {
            warn!(error = %e, category = %filter, "Showing vendor listing error");
            Err(e)
        }
        ok => ok,
    };

    let view = ListingView::loading().resolve(outcome);
    Ok(Html(pages::vendors_page(&filter, &view, current_year())))
}

pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

fn current_year() -> i32 {
    Utc::now().year()
}
