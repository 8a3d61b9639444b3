use std::sync::Arc;

use openvoice_config::Config;
use tokio::signal;

pub mod controller;
pub mod events;
pub mod state;
pub mod ui;
pub mod workflow;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState::new(Config::new()));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}
