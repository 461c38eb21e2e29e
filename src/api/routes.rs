use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{get_favicon, get_page, get_ranking, post_sort, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_page))
        .route("/favicon.ico", get(get_favicon))
        .route("/sort/:key", post(post_sort))
        .route("/api/ranking", get(get_ranking))
        .with_state(state)
}
