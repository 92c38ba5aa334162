use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::AppState;


/// Latest frame of the mounted view tree.
#[axum_macros::debug_handler]
pub async fn get_index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.render_handle.frame())
}

/// Tears the view tree down and mounts it again, refetching both records.
#[axum_macros::debug_handler]
pub async fn post_remount(State(state): State<Arc<AppState>>) -> Response {
    if !state.render_handle.remount() {
        log::error!("Remount requested after the render loop stopped");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Redirect::to("/").into_response()
}
