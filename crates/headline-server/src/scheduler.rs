//! Background job scheduler.
//!
//! Registers the recurring ingestion job on the shared [`AppState`].

use std::sync::Arc;

use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::api::AppState;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
/// Without a configured headline source no job is registered.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// `cron` does not parse, or the scheduler fails to start.
pub async fn build_scheduler(
    state: AppState,
    cron: &str,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    if state.source.is_some() {
        register_ingest_job(&scheduler, state, cron).await?;
    } else {
        tracing::warn!("scheduler: no headline source configured; ingest job not registered");
    }

    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_ingest_job(
    scheduler: &JobScheduler,
    state: AppState,
    cron: &str,
) -> Result<(), JobSchedulerError> {
    let state = Arc::new(state);

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let state = Arc::clone(&state);

        Box::pin(async move {
            tracing::info!("scheduler: starting ingest run");
            run_ingest_job(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(cron = %cron, "scheduler: registered ingest job");
    Ok(())
}

async fn run_ingest_job(state: &AppState) {
    let Some(source) = state.source.as_deref() else {
        return;
    };

    let today = Utc::now().date_naive();
    match headline_ingest::run_ingestion(source, &state.pool, &state.plan, today).await {
        Ok(report) => tracing::info!(
            fetched = report.fetched,
            written = report.written,
            "scheduler: ingest run complete"
        ),
        Err(e) => tracing::error!(error = %e, "scheduler: ingest run failed"),
    }
}
