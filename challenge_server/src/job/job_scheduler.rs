use std::{sync::Arc, time::Duration};

use anyhow::Result;
use challenge_core::ChallengeController;
use tokio_cron_scheduler::JobScheduler;

use crate::job::handler::job_refresh_prices;

pub async fn schedule_jobs(
    controller: Arc<ChallengeController>,
    interval: Duration,
) -> Result<JobScheduler> {
    log::info!("Initializing job scheduler...");

    let scheduler = match JobScheduler::new().await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            log::error!("Failed to create job scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create job scheduler: {}", e));
        }
    };

    let job_refresh_prices = match job_refresh_prices(controller, interval) {
        Ok(job) => job,
        Err(e) => {
            log::error!("Failed to create price refresh job: {}", e);
            return Err(anyhow::anyhow!("Failed to create price refresh job: {}", e));
        }
    };

    if let Err(e) = scheduler.add(job_refresh_prices).await {
        log::error!("Failed to add price refresh job to scheduler: {}", e);
        return Err(anyhow::anyhow!("Failed to add price refresh job: {}", e));
    }

    if let Err(e) = scheduler.start().await {
        log::error!("Failed to start job scheduler: {}", e);
        return Err(anyhow::anyhow!("Failed to start scheduler: {}", e));
    }

    log::info!(
        "Job scheduler started, refreshing prices every {}s",
        interval.as_secs()
    );
    Ok(scheduler)
}
