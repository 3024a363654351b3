use crate::domain_model::Severity;
use crate::domain_port::LogLevelProvider;
use crate::settings::Settings;
use std::sync::atomic::{AtomicU8, Ordering};

/// A threshold that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLevel(pub Severity);

impl LogLevelProvider for FixedLevel {
    fn current_max_rank(&self) -> u8 {
        self.0.rank()
    }
}

/// A threshold that can be changed while loggers are using it.
#[derive(Debug)]
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub fn new(level: Severity) -> Self {
        Self(AtomicU8::new(level.rank()))
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.log.level)
    }

    pub fn set(&self, level: Severity) {
        self.0.store(level.rank(), Ordering::Relaxed);
    }

    pub fn get(&self) -> Severity {
        Severity::from_rank(self.0.load(Ordering::Relaxed))
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(Severity::ERROR)
    }
}

impl LogLevelProvider for AtomicLevel {
    fn current_max_rank(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }
}
