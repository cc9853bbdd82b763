//! Per-stage progress records for a single analysis run.

use crate::{IntegralError, Quadrant, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

pub const PENDING_MESSAGE: &str = "Waiting to start...";

/// A step of the run whose progress is reported: one per quadrant plus synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Stage {
    Quadrant(Quadrant),
    Orchestrator,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Quadrant(Quadrant::Ul),
        Stage::Quadrant(Quadrant::Ur),
        Stage::Quadrant(Quadrant::Ll),
        Stage::Quadrant(Quadrant::Lr),
        Stage::Orchestrator,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Stage::Quadrant(q) => q.id(),
            Stage::Orchestrator => "orchestrator",
        }
    }

    pub fn processing_message(self) -> String {
        match self {
            Stage::Quadrant(q) => format!("Analyzing {} quadrant data...", q.code()),
            Stage::Orchestrator => "Synthesizing integral analysis...".to_string(),
        }
    }

    pub fn completed_message(self) -> String {
        match self {
            Stage::Quadrant(q) => format!("✅ {} analysis complete", q.code()),
            Stage::Orchestrator => "✅ Integral orchestration complete".to_string(),
        }
    }
}

impl From<Quadrant> for Stage {
    fn from(quadrant: Quadrant) -> Self {
        Stage::Quadrant(quadrant)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Stage {
    type Err = IntegralError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("orchestrator") {
            return Ok(Stage::Orchestrator);
        }
        s.parse::<Quadrant>()
            .map(Stage::Quadrant)
            .map_err(|_| IntegralError::Parse(format!("unknown stage '{s}'")))
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.id().to_string()
    }
}

impl TryFrom<String> for Stage {
    type Error = IntegralError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Processing,
    Completed,
}

impl StageStatus {
    /// True when `next` is the immediate successor of `self`.
    pub fn advances_to(self, next: StageStatus) -> bool {
        matches!(
            (self, next),
            (StageStatus::Pending, StageStatus::Processing)
                | (StageStatus::Processing, StageStatus::Completed)
        )
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StageStatus::Pending => "pending",
            StageStatus::Processing => "processing",
            StageStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub status: StageStatus,
    pub message: String,
    pub updated_at: DateTime<Utc>,
}

impl ProgressRecord {
    pub fn pending() -> Self {
        Self {
            status: StageStatus::Pending,
            message: PENDING_MESSAGE.to_string(),
            updated_at: Utc::now(),
        }
    }
}

/// One `(stage, status, message)` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: Stage,
    pub status: StageStatus,
    pub message: String,
}

/// Receiver of progress notifications from a run.
///
/// Implementations must tolerate calls in any order and at any frequency for
/// the five known stages.
pub trait ProgressSink: Send + Sync {
    fn update(&self, stage: Stage, status: StageStatus, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(Stage, StageStatus, &str) + Send + Sync,
{
    fn update(&self, stage: Stage, status: StageStatus, message: &str) {
        self(stage, status, message)
    }
}

/// Sink that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn update(&self, _stage: Stage, _status: StageStatus, _message: &str) {}
}

/// Latest record for each of the five stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBoard {
    records: BTreeMap<Stage, ProgressRecord>,
}

impl Default for ProgressBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBoard {
    pub fn new() -> Self {
        Self { records: Stage::ALL.into_iter().map(|s| (s, ProgressRecord::pending())).collect() }
    }

    /// Puts every stage back to pending.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Stores the update and reports whether it was a forward step.
    ///
    /// Out-of-order updates are still stored; the board always shows the
    /// latest notification per stage.
    pub fn apply(&mut self, stage: Stage, status: StageStatus, message: &str) -> bool {
        let record = self.records.entry(stage).or_insert_with(ProgressRecord::pending);
        let forward = record.status.advances_to(status);
        record.status = status;
        record.message = message.to_string();
        record.updated_at = Utc::now();
        forward
    }

    pub fn get(&self, stage: Stage) -> Option<&ProgressRecord> {
        self.records.get(&stage)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Stage, &ProgressRecord)> {
        self.records.iter()
    }

    pub fn is_finished(&self) -> bool {
        self.records.values().all(|r| r.status == StageStatus::Completed)
    }
}

impl ProgressSink for Mutex<ProgressBoard> {
    fn update(&self, stage: Stage, status: StageStatus, message: &str) {
        if let Ok(mut board) = self.lock() {
            board.apply(stage, status, message);
        }
    }
}
