//! Route handlers.

use askama::Template;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::http::page::{IndexPage, TEMPLATE_RENDER_FAILED};
use crate::http::server::AppState;
use crate::report::DebugReport;

/// `GET /`: the static front page.
pub async fn index() -> Response {
    match IndexPage.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render index page");
            (StatusCode::INTERNAL_SERVER_ERROR, TEMPLATE_RENDER_FAILED).into_response()
        }
    }
}

/// `/api/debug-info`: the report for this very request, as JSON.
pub async fn debug_info(State(state): State<AppState>, request: Request) -> Json<DebugReport> {
    let (parts, _body) = request.into_parts();

    tracing::debug!(
        method = %parts.method,
        uri = %parts.uri,
        version = ?parts.version,
        "Building debug report"
    );

    Json(DebugReport::build(&parts, &state.env))
}
