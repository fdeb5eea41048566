use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::core::error::Result;
use crate::features::shares::services::ShareStore;
use crate::modules::storage::MinIOClient;

/// Batch size for a single sweep pass
const BATCH_SIZE: i64 = 100;

/// Expiry sweeper worker that runs in the background.
///
/// Lazy deletion on read already keeps expired shares invisible; the sweeper
/// reclaims the rows nobody asked for again, together with their blobs.
pub struct ExpirySweeper {
    store: Arc<ShareStore>,
    storage: Arc<MinIOClient>,
    sweep_interval: Duration,
}

impl ExpirySweeper {
    pub fn new(store: Arc<ShareStore>, storage: Arc<MinIOClient>, sweep_interval_secs: u64) -> Self {
        Self {
            store,
            storage,
            sweep_interval: Duration::from_secs(sweep_interval_secs),
        }
    }

    /// Run the sweeper in a background loop
    pub async fn run(&self) {
        tracing::info!(
            "Starting expiry sweeper (interval: {}s)",
            self.sweep_interval.as_secs()
        );

        let mut interval = interval(self.sweep_interval);

        loop {
            interval.tick().await;

            if let Err(e) = self.sweep().await {
                tracing::error!("Error sweeping expired shares: {:?}", e);
            }
        }
    }

    /// Delete one batch of expired shares and their blobs
    async fn sweep(&self) -> Result<()> {
        let expired = self.store.fetch_expired(BATCH_SIZE).await?;

        if expired.is_empty() {
            return Ok(());
        }

        tracing::info!("Sweeping {} expired shares", expired.len());

        for share in expired {
            // Blob first: if this fails the row stays and the next sweep
            // retries the pair.
            if let Err(e) = self.storage.delete(&share.object_key).await {
                tracing::warn!(
                    "Failed to delete blob '{}' for expired share '{}': {}",
                    share.object_key,
                    share.code,
                    e
                );
                continue;
            }

            if let Err(e) = self.store.delete(share.id).await {
                tracing::error!("Failed to delete expired share '{}': {:?}", share.code, e);
            }
        }

        Ok(())
    }
}
