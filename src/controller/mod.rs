use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::handler::HandlerWithoutStateExt;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::gateways::MessagingGateway;
use crate::helpers::handler_404::page_not_found_handler;

pub mod health_check;
pub mod reservation_controller;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn MessagingGateway>,
}

pub async fn serve(
    app_state: AppState,
) -> anyhow::Result<()> {
    let port = SocketAddr::from(([0, 0, 0, 0], app_state.config.port));
    let application = router_endpoints(app_state);

    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    let public_files = ServeDir::new(&app_state.config.public_dir)
        .not_found_service(page_not_found_handler.into_service());

    Router::new()
        .merge(health_check::router())
        .nest("/api", reservation_controller::router(app_state))
        .fallback_service(public_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
        )
}
