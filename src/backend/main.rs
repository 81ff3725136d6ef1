/**
 * Cyber Kittens Server Entry Point
 *
 * Loads `.env`, sets up tracing, reads `ServerConfig` from the environment
 * and serves the Axum app on `0.0.0.0:$PORT`.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cyber_kittens::backend::server::{config::ServerConfig, init::create_app};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,cyber_kittens=debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env()?;
    tracing::debug!("[STARTUP] Loaded {:?}", config);

    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Cyber Kittens listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin cyber-kittens-server --features ssr");
    std::process::exit(1);
}
