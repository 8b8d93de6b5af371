use std::net::SocketAddr;

use dotenvy::dotenv;
use educa::logging::init_tracing;
use educa::router::init_router;
use educa::state::init_app_state;
use educa_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("⚠️  Failed to initialize tracing: {:#}", e);
    }

    if let Err(e) = run().await {
        error!(error = %format!("{:#}", e), "Server failed");
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let state = init_app_state().await?;
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address = %address, "Server listening");
    println!("🚀 Server running on http://{}", address);
    println!("📚 Swagger UI available at http://{}/docs", address);
    println!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
