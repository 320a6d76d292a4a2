use grocery_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, work dir, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    setup_environment(&config)?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        engine = ?config.database_engine,
        "Grocery server starting..."
    );

    // 2. Server state (database, mailer)
    let state = ServerState::initialize(&config).await?;

    // 3. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
