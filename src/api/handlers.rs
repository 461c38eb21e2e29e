use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Redirect},
};
use log::{error, info};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::models::RankingResponse;
use crate::api::page::{render_page, FAVICON_SVG};
use crate::domain::{RankingBoard, SortKey};

/// Shared server state: the single ranking board on display
#[derive(Default)]
pub struct AppState {
    pub board: RwLock<RankingBoard>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace_board(&self, board: RankingBoard) {
        *self.board.write().await = board;
    }
}

pub async fn get_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let board = state.board.read().await;
    match render_page(&board) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render ranking page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render Error").into_response()
        }
    }
}

pub async fn get_favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], FAVICON_SVG)
}

pub async fn get_ranking(State(state): State<Arc<AppState>>) -> Json<RankingResponse> {
    let board = state.board.read().await;
    Json(RankingResponse::from(&*board))
}

pub async fn post_sort(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let key = match key.parse::<SortKey>() {
        Ok(key) => key,
        Err(e) => return (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    };

    info!("Sorting ranking by {}", key);
    state.board.write().await.apply_sort(key);

    Redirect::to("/").into_response()
}
