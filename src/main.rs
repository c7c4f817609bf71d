use std::sync::Arc;

use fitnexus::api::create_routes;
use fitnexus::config::{run_migrations, AppConfig, DatabaseConfig, DatabaseSeeder};
use fitnexus::logging;
use fitnexus::store::{EntityStore, PgStore};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::from_env()?;
    logging::init(&app_config.log_level)?;

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;

    if app_config.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied");
    }

    if app_config.seed_demo_data {
        DatabaseSeeder::new(pool.clone()).seed_all().await?;
    }

    let store: Arc<dyn EntityStore> = Arc::new(PgStore::new(pool));
    let app = create_routes(store);

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!(
        environment = %app_config.environment,
        development = app_config.is_development(),
        "FitNexus API listening on http://{}",
        address
    );
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
