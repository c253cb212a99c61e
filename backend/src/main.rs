use std::net::SocketAddr;

use tracing::{info, Level};

use asset_ledger_backend::storage::CsvConnection;
use asset_ledger_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let connection = CsvConnection::new_default()?;
    let app_state = initialize_backend(connection)?;
    let app = create_router(app_state);

    let port = std::env::var("LEDGER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
