use crate::domain_model::{LogRecord, Severity, render_failure};
use crate::domain_port::ExternalLogger;
use anyhow::anyhow;
use std::sync::Mutex;

/// A record kept by [`MemoryLogService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub message: String,
    pub failure: Option<String>,
}

/// Log service that keeps what it receives, or fails every call.
#[derive(Debug, Default)]
pub struct MemoryLogService {
    records: Mutex<Vec<CapturedRecord>>,
    fail_with: Option<String>,
}

impl MemoryLogService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Mutex::default(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ExternalLogger for MemoryLogService {
    fn log(&self, record: &LogRecord<'_>) -> anyhow::Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(anyhow!("{reason}"));
        }
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(CapturedRecord {
                severity: record.severity,
                message: record.message.to_owned(),
                failure: record.failure.map(render_failure),
            });
        Ok(())
    }
}
