use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::api::{RecordSource, WcaClient};
use crate::config::settings::AppConfig;
use crate::services::loader::RankingLoader;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(AppState::new());

        let client = WcaClient::new(&self.config.api)?;
        let loader = RankingLoader::new(client, &self.config.ranking);
        spawn_initial_load(loader, state.clone());

        let app = create_router(state)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Load the ranking in the background and hand the result to the board once
pub fn spawn_initial_load<S>(loader: RankingLoader<S>, state: Arc<AppState>) -> JoinHandle<()>
where
    S: RecordSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let board = loader.load_board().await;
        state.replace_board(board).await;
    })
}
