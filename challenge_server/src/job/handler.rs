use std::{sync::Arc, time::Duration};

use challenge_core::{ChallengeController, render::render_summary};
use tokio_cron_scheduler::{Job, JobSchedulerError};

pub fn job_refresh_prices(
    controller: Arc<ChallengeController>,
    interval: Duration,
) -> Result<Job, JobSchedulerError> {
    Job::new_repeated_async(interval, move |_uuid, _l| {
        let controller = controller.clone();
        Box::pin(async move {
            match controller.try_refresh().await {
                Some(report) => {
                    log::info!("Scheduled refresh finished for day {}", report.day);
                    let summary = controller.summary().await;
                    log::info!("\n{}", render_summary(&summary));
                }
                None => log::warn!("Previous refresh still running, skipping this tick"),
            }
        })
    })
}
