//! Activity reporting
//!
//! A single fire-and-forget call at startup. Nothing is read back and a
//! failed report never stops the game.

use serde::{Deserialize, Serialize};

/// Identifying payload sent once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityReport {
    pub student_id: String,
    pub student_name: String,
    pub activity_name: String,
    pub task: String,
}

impl Default for ActivityReport {
    fn default() -> Self {
        Self {
            student_id: "anonymous".to_string(),
            student_name: "anonymous".to_string(),
            activity_name: "Test Drive".to_string(),
            task: "Collect every item".to_string(),
        }
    }
}

/// Sink for activity reports
pub trait ActivityTracker {
    fn track(&self, report: &ActivityReport);
}

/// Writes reports to the log as JSON
#[derive(Debug, Default)]
pub struct LogTracker;

impl ActivityTracker for LogTracker {
    fn track(&self, report: &ActivityReport) {
        match serde_json::to_string(report) {
            Ok(json) => log::info!("Activity: {}", json),
            Err(e) => log::warn!("Activity report dropped: {}", e),
        }
    }
}

/// Discards every report
#[derive(Debug, Default)]
pub struct NullTracker;

impl ActivityTracker for NullTracker {
    fn track(&self, _report: &ActivityReport) {}
}
