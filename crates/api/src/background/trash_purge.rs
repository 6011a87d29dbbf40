//! Periodic purge of trashed content past its retention window.
//!
//! Unprotected items are removed 30 days after deletion, protected items
//! after 60. Each sweep walks every content type in small batches so a
//! large backlog never holds locks for long.

use std::time::Duration;

use chrono::Utc;
use onair_core::types::Timestamp;
use onair_db::models::trash::PurgeReport;
use onair_db::repositories::TrashRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::config::PurgeConfig;

/// Run the trash purge loop until `cancel` is triggered.
///
/// The first sweep runs immediately, then once per `interval_secs`. A
/// failed sweep is logged and retried on the next tick.
pub async fn run(pool: PgPool, config: PurgeConfig, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = config.interval_secs,
        batch_size = config.batch_size,
        "Trash purge job started"
    );

    let mut interval = tokio::time::interval(Duration::from_secs(config.interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Trash purge job stopping");
                break;
            }
            _ = interval.tick() => {
                if let Err(e) = sweep(&pool, Utc::now(), config.batch_size).await {
                    tracing::error!(error = %e, "Trash purge: sweep failed");
                }
            }
        }
    }
}

/// Run a single purge sweep as of `now` and log the outcome.
pub async fn sweep(
    pool: &PgPool,
    now: Timestamp,
    batch_size: i64,
) -> Result<PurgeReport, sqlx::Error> {
    let report = TrashRepo::purge_expired(pool, now, batch_size).await?;
    if report.total_purged > 0 {
        tracing::info!(total_purged = report.total_purged, "Trash purge: removed expired items");
    } else {
        tracing::debug!("Trash purge: nothing to remove");
    }
    Ok(report)
}
