//! Free-text feedback from the form.
//!
//! Submissions are acknowledged and then dropped: nothing is written to disk
//! or sent anywhere. Only the length of the text reaches the logs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use uuid::Uuid;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your feedback!";

/// Acknowledgement handed back to the form
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackReceipt {
    pub ticket: Uuid,
    pub received_at: DateTime<Utc>,
    pub chars: usize,
    pub message: &'static str,
}

#[derive(Debug, Default)]
pub struct FeedbackDesk {
    acknowledged: AtomicU64,
}

impl FeedbackDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&self, text: &str) -> FeedbackReceipt {
        let receipt = FeedbackReceipt {
            ticket: Uuid::new_v4(),
            received_at: Utc::now(),
            chars: text.trim().chars().count(),
            message: ACKNOWLEDGEMENT,
        };
        let total = self.acknowledged.fetch_add(1, Ordering::Relaxed) + 1;

        info!(
            ticket = %receipt.ticket,
            chars = receipt.chars,
            total,
            "Feedback acknowledged"
        );

        receipt
    }

    /// Submissions acknowledged since startup
    pub fn acknowledged(&self) -> u64 {
        self.acknowledged.load(Ordering::Relaxed)
    }
}
