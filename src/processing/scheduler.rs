use crate::error::M3uGenError;
use crate::model::ConfigDto;
use crate::processing::processor::playlist::run_cycle;
use log::{error, info};
use std::time::Duration;

/// Interval to sleep after a cycle. Failed cycles fall back to the configured interval.
pub fn next_interval(result: Result<Duration, M3uGenError>, config: &ConfigDto) -> Duration {
    match result {
        Ok(interval) => interval,
        Err(err) => {
            error!("Error generating playlist: {err}");
            config.refresh_interval()
        }
    }
}

/// Runs cycles forever, no error ends the loop.
pub async fn exec_scheduler(config: &ConfigDto) {
    loop {
        let interval = next_interval(run_cycle(config).await, config);
        info!("Sleeping for {} seconds before next run...", interval.as_secs());
        tokio::time::sleep(interval).await;
    }
}
