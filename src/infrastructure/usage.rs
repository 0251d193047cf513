use async_trait::async_trait;

use crate::application::ports::{UsageRecord, UsageTracker, UsageTrackerError};

/// Usage sink that emits structured log events. Stands in when no external
/// billing sink is wired.
#[derive(Default)]
pub struct LogUsageTracker;

impl LogUsageTracker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UsageTracker for LogUsageTracker {
    async fn record(&self, record: UsageRecord) -> Result<(), UsageTrackerError> {
        tracing::info!(
            model = %record.model,
            provider = %record.provider,
            operation = %record.operation,
            user_id = ?record.user_id.map(|id| id.as_uuid()),
            video_id = ?record.video_id,
            user_video_id = ?record.user_video_id.map(|id| id.as_uuid()),
            request_duration_ms = record.request_duration_ms,
            "LLM usage"
        );
        Ok(())
    }
}
