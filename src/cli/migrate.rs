use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use crate::config::BootstrapSettings;

/// Run database migrations as a one-shot maintenance operation
///
/// Connects to the configured database, applies all pending migrations,
/// closes the connection and returns. Invoked out-of-band via the `migrate`
/// subcommand; not part of request serving.
pub async fn run_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let settings = BootstrapSettings::from_env()?;

    tracing::info!("Connecting to database: {}", settings.database_url());
    let db = Database::connect(settings.database_url()).await?;

    tracing::info!("Applying pending migrations...");
    Migrator::up(&db, None).await?;

    db.close().await?;
    tracing::info!("All migrations completed successfully");

    Ok(())
}
