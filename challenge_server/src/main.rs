mod challenge;
mod docs;
mod error;
mod info;
mod job;
mod router;
mod state;
mod vote;

use std::sync::Arc;

use anyhow::Context;
use challenge_core::{
    ChallengeController, challenge::clock::ChallengeClock, helpers::config::ChallengeConfig,
    prices::PriceSources, render::render_summary, storage::ChallengeStorage,
};
use dotenvy::dotenv;
use job::job_scheduler::schedule_jobs;
use router::router;
use state::ServerState;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ChallengeConfig::from_env()?;

    let db = sled::open(&config.db_path)
        .with_context(|| format!("Failed to open database at {}", config.db_path))?;
    let storage = ChallengeStorage::new(&db)?;
    let sources = PriceSources::from_config(&config)?;
    let clock = ChallengeClock::new(config.challenge_start);

    let controller = Arc::new(ChallengeController::load(storage, sources, clock)?);

    log::info!("Fetching latest prices...");
    controller.refresh().await;
    log::info!("\n{}", render_summary(&controller.summary().await));

    let mut scheduler = schedule_jobs(controller.clone(), config.refresh_interval).await?;

    let app = router(Arc::new(ServerState::from(controller)));

    let listener = tokio::net::TcpListener::bind(&config.server_domain)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_domain))?;
    log::info!("Listening on {}", config.server_domain);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = scheduler.shutdown().await {
        log::error!("Failed to stop job scheduler: {}", e);
    }
    db.flush_async().await?;

    log::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutdown signal received");
}
