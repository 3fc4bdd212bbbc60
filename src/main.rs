use dotenvy::dotenv;
use financial_roadmap::{
    api::{self, AppState},
    config::{database, milestones, server},
    core::milestone,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars may also be set externally
    if dotenv().is_ok() {
        info!("Loaded .env file.");
    }

    // 3. Resolve settings
    let listen_addr = server::get_listen_addr()?;
    let seeds = milestones::load_seed_milestones(server::get_config_path())
        .inspect_err(|e| error!("Failed to load milestone configuration: {}", e))?;

    // 4. Connect and ensure the schema
    let db = database::create_connection(&database::get_database_url())
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    // 5. Seed milestones on first run only
    let seeded = milestone::seed_milestones(&db, &seeds)
        .await
        .inspect_err(|e| error!("Failed to seed milestones: {}", e))?;
    if seeded > 0 {
        info!("Seeded {} default milestones.", seeded);
    }

    // 6. Serve the API
    api::serve(AppState::new(db), listen_addr).await
}
