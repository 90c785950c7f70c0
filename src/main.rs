use clap::Parser;
use migration::{Migrator, MigratorTrait};
use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sea_orm::Database;
use std::sync::Arc;
use std::time::Duration;

use volunteer_backend::api::{HealthApi, VolunteerApi};
use volunteer_backend::app_data::AppData;
use volunteer_backend::cli::{Cli, Commands, migrate};
use volunteer_backend::config::{BootstrapSettings, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Migrate) => migrate::run_migrations().await,
        Some(Commands::Serve) | None => serve().await,
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let settings = BootstrapSettings::from_env()?;

    // The connection is opened once here, shared across requests, and closed
    // on every exit path after the server loop ends
    let db = Database::connect(settings.database_url()).await?;
    tracing::info!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None).await?;
    tracing::debug!("Database migrations completed");

    let app_data = Arc::new(AppData::init(db.clone()));

    let api_service = OpenApiService::new(
        (VolunteerApi::new(Arc::clone(&app_data)), HealthApi),
        "Volunteer Registration API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://localhost:{}", settings.server_port()));

    let ui = api_service.swagger_ui();

    // API routes sit at the root so the external paths are /users, /users/:id
    let app = Route::new().nest("/swagger", ui).nest("/", api_service);

    let bind_address = settings.bind_address();
    tracing::info!("Starting server on http://{}", bind_address);

    let result = Server::new(TcpListener::bind(bind_address))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            Some(Duration::from_secs(10)),
        )
        .await;

    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database connection: {}", e);
    }

    result?;
    Ok(())
}
