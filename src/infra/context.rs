use super::LoggerSlot;
use crate::domain_model::{Bundle, BundleInfo};
use crate::domain_port::{ComponentContext, ExternalLoggerLookup};
use std::sync::Arc;

/// A component context assembled from plain values. Every logger built
/// from it gets its own tracker over the shared slot.
#[derive(Debug, Clone)]
pub struct StaticContext {
    bundle: BundleInfo,
    slot: Arc<LoggerSlot>,
}

impl StaticContext {
    pub fn new(bundle: BundleInfo, slot: Arc<LoggerSlot>) -> Self {
        Self { bundle, slot }
    }
}

impl ComponentContext for StaticContext {
    fn bundle(&self) -> &dyn Bundle {
        &self.bundle
    }

    fn logger_lookup(&self) -> Arc<dyn ExternalLoggerLookup> {
        Arc::new(self.slot.tracker())
    }
}
