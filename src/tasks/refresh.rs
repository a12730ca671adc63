//! Dataset Refresh Task
//!
//! Background task that keeps the export cache populated from the portal.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::cache::SharedCache;
use crate::datasets::{self, Dataset};
use crate::error::Result;
use crate::portal::PortalSession;

/// Spawns the background task that refreshes the export cache.
///
/// The first cycle runs immediately, then one cycle per interval. Each cycle
/// fetches and transforms the three datasets in fixed order (licenses,
/// backupsets, groups) and writes each result into the cache under its own
/// lock acquisition, so readers can observe a partially refreshed cache.
///
/// A failed cycle is fatal to the task: the error is logged and the task
/// returns, while the server keeps serving whatever was cached last. There
/// is no retry and no re-login.
///
/// # Arguments
/// * `session` - authenticated portal session, owned by the task
/// * `cache` - shared cache written by the task, read by the HTTP handlers
/// * `interval_minutes` - minutes between refresh cycles
///
/// # Returns
/// A JoinHandle used to abort the task during shutdown.
pub fn spawn_refresh_task(
    session: PortalSession,
    cache: SharedCache,
    interval_minutes: u64,
) -> JoinHandle<()> {
    let period = Duration::from_secs(interval_minutes * 60);

    tokio::spawn(async move {
        info!(interval_minutes, "starting dataset refresh task");

        let mut ticker = tokio::time::interval(period);
        loop {
            // First tick completes immediately
            ticker.tick().await;

            if let Err(err) = refresh_all(&session, &cache).await {
                error!(error = %err, "refresh cycle failed, stopping refresh task");
                return;
            }
        }
    })
}

/// Runs one full refresh cycle over all datasets.
async fn refresh_all(session: &PortalSession, cache: &SharedCache) -> Result<()> {
    for dataset in Dataset::ALL {
        let raw = session.fetch_export(dataset.export_path()).await?;
        let csv_text = datasets::transform(dataset, &raw)?;
        let bytes = csv_text.len();

        {
            let mut guard = cache.lock().await;
            guard.insert(dataset, csv_text);
        }

        info!(dataset = dataset.name(), bytes, "dataset refreshed");
    }
    Ok(())
}
