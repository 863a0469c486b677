use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// Index statistics for monitoring
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents_indexed: usize,
    pub distinct_keywords: usize,
    pub total_occurrences: usize,

    // Token metrics
    pub tokens_scanned: usize,
    pub tokens_rejected: usize,

    pub built_at: Option<DateTime<Utc>>,
}

impl IndexStats {
    pub fn acceptance_rate(&self) -> f32 {
        if self.tokens_scanned == 0 {
            return 0.0;
        }
        (self.tokens_scanned - self.tokens_rejected) as f32 / self.tokens_scanned as f32
    }
}
