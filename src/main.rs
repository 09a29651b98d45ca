use anyhow::Context;
use restaurant_orders::api::{self, AppState};
use restaurant_orders::config::Config;
use restaurant_orders::lifecycle::{setup_tracing, RestaurantSystem};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    setup_tracing();

    info!(?config, "Starting restaurant order service");

    let system = match &config.data_dir {
        Some(dir) => RestaurantSystem::with_data_dir(dir)
            .with_context(|| format!("failed to open data directory {}", dir.display()))?,
        None => RestaurantSystem::new(),
    };

    if config.no_seed {
        info!("Menu seeding disabled");
    } else {
        system.seed_menu().await.context("failed to seed menu")?;
    }

    let app = api::router(AppState::new(&system), &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router and its client clones are gone; the actors can now drain
    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, stopping server");
}
