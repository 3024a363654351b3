#![allow(dead_code)]

use bundle_logger::domain_model::{BundleInfo, Severity};
use bundle_logger::facade::ScrLogger;
use bundle_logger::infra::{Console, FixedLevel, LoggerSlot, MemoryConsole, StaticContext};
use std::sync::Arc;

pub const LABEL: &str = "bundle org.example.component:1.2.3 (11)";

pub struct Harness {
    pub logger: ScrLogger,
    pub slot: Arc<LoggerSlot>,
    pub out: Arc<MemoryConsole>,
    pub err: Arc<MemoryConsole>,
}

pub fn harness(max: Severity) -> Harness {
    let slot = Arc::new(LoggerSlot::new());
    let context = StaticContext::new(
        BundleInfo::new(11, "org.example.component", "1.2.3"),
        slot.clone(),
    );
    let out = Arc::new(MemoryConsole::new());
    let err = Arc::new(MemoryConsole::new());
    let logger = ScrLogger::with_console(
        &context,
        Arc::new(FixedLevel(max)),
        Console::new(out.clone(), err.clone()),
    );
    Harness {
        logger,
        slot,
        out,
        err,
    }
}
