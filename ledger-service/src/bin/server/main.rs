use std::sync::Arc;

use auth::TokenIssuer;
use chrono::Duration;
use ledger_service::config::Config;
use ledger_service::domain::account::service::AuthService;
use ledger_service::inbound::http::router::create_router;
use ledger_service::outbound::gateways::ChainGateway;
use ledger_service::outbound::repositories::InMemoryAccountDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledger_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "ledger-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Aborts here when no source provides the signing secret
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_expiration_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let token_issuer = TokenIssuer::new(
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.expiration_minutes),
    );
    let directory = Arc::new(InMemoryAccountDirectory::new());
    let auth_service = Arc::new(AuthService::new(directory, token_issuer));
    let chain_gateway = Arc::new(ChainGateway::new());

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, chain_gateway);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
