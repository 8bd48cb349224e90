use meter_api::{create_pool, db, routes, Config};
use std::net::SocketAddr;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    // Create database pool and make sure the readings table exists
    let pool = create_pool(&config).await?;
    db::init_schema(&pool).await?;
    info!("Database connection pool created");

    // Initialize repository, service and insight client
    let repository = meter_api::repositories::ReadingRepository::new(pool);
    let service = meter_api::services::ReadingService::new(repository);
    let insight = meter_api::insight::InsightGenerator::new(&config.insight);

    // Create router
    let state = routes::AppState {
        service,
        insight,
        config: config.clone(),
    };
    let app = routes::create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
