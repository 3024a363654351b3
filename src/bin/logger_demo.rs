use bundle_logger::domain_model::{Arg, BundleInfo, Severity};
use bundle_logger::facade::ScrLogger;
use bundle_logger::infra::{AtomicLevel, LoggerSlot, StaticContext, TracingLogService};
use bundle_logger::logger::*;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();

    let slot = Arc::new(LoggerSlot::new());
    let levels = Arc::new(AtomicLevel::new(Severity::INFO));
    let context = StaticContext::new(BundleInfo::new(3, "org.example.demo", "0.1.0"), slot.clone());
    let scr_logger = ScrLogger::new(&context, levels.clone());

    // no log service yet: console
    scr_logger.info("hello {0}", &[Arg::from("console")])?;
    scr_logger.debug("not shown at info", &[])?;

    levels.set(Severity::DEBUG);
    scr_logger.debug("shown after raising the level", &[])?;

    // tracing as the log service
    slot.register(Arc::new(TracingLogService::new()));
    scr_logger.info("hello {0}", &[Arg::from("tracing")])?;
    scr_logger.debug("filtered by the subscriber until reloaded", &[])?;

    let config = LogConfig {
        filter: "debug".to_string(),
    };
    logger.reload_from_config(&config)?;
    scr_logger.debug("visible through tracing now", &[])?;

    slot.unregister();
    scr_logger.warn("back on the console", &[])?;

    scr_logger.close();
    Ok(())
}
