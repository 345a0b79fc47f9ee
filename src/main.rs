use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use crate::config::Config;
use crate::controller::AppState;
use crate::gateways::twilio_gateway::TwilioGateway;

pub mod config;
pub mod controller;
pub mod errors;
pub mod gateways;
pub mod helpers;
pub mod models;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = Config::parse();

    let http_client = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client for Twilio")?;
    let gateway = TwilioGateway::new(http_client, &config);

    controller::serve(AppState {
        config: Arc::new(config),
        gateway: Arc::new(gateway),
    }).await
}
