//! Users API entry-point: loads settings, connects to MongoDB and serves the
//! REST endpoints, health probes and (in debug builds) OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::domain::UserDirectoryService;
use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::{GatewayConfig, MongoGateway, MongoUserRepository};
use users_api::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let dotenv = dotenvy::dotenv();
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to read .env file"),
    }

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).wrap_err("failed to load settings")?;
    let bind_addr = settings.bind_addr()?;
    let gateway_config = GatewayConfig::new(settings.mongo_uri()?)
        .with_database(settings.database())
        .with_connect_timeout(settings.connect_timeout()?);

    let gateway = match MongoGateway::connect(gateway_config).await {
        Ok(gateway) => gateway,
        Err(err) => {
            error!(error = %err, "document store connection failed");
            return Err(err).wrap_err("failed to connect to the document store");
        }
    };

    let repository = MongoUserRepository::new(&gateway, settings.collection());
    let users = UserDirectoryService::new(Arc::new(repository))
        .with_operation_timeout(settings.operation_timeout()?);

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, Arc::new(users));
    info!(bind_addr = %config.bind_addr(), "starting HTTP server");
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    let outcome = server.await;
    health_state.mark_unhealthy();
    gateway.shutdown().await;
    outcome.wrap_err("HTTP server stopped with an error")
}
