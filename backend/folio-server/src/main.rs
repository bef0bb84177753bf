use folio_server::{AppState, ImageStore, SiteSettings, Templates, build_router, logger};

use folio_auth::{SessionTokens, generate_secret};
use folio_db::ProfileRepository;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = folio_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = folio_db::connect(&database_path).await?;
    info!("Database ready");

    if ProfileRepository::new(pool.clone()).find().await?.is_none() {
        warn!("No profile provisioned yet; run `folio init-profile` before logging in");
    }

    let secret = match config.auth.session_secret {
        Some(ref secret) => secret.clone(),
        None => {
            warn!("auth.session_secret not set; using a random secret, sessions end on restart");
            generate_secret()
        }
    };
    let sessions = SessionTokens::with_hs256(secret.as_bytes(), config.auth.session_ttl_secs);

    let images = ImageStore::new(&config.assets.root);
    images.ensure_dirs().await?;
    info!("Serving images from {}", images.root().display());

    let app_state = AppState {
        pool,
        sessions: Arc::new(sessions),
        templates: Arc::new(Templates::new()?),
        images: Arc::new(images),
        settings: Arc::new(SiteSettings::from(&config)),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
