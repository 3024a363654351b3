use bundle_logger::domain_model::{Arg, BundleInfo, Severity};
use bundle_logger::facade::ScrLogger;
use bundle_logger::infra::{AtomicLevel, LoggerSlot, StaticContext, TracingLogService};
use bundle_logger::logger::*;
use bundle_logger::settings::*;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let slot = Arc::new(LoggerSlot::new());
    let context = StaticContext::new(BundleInfo::new(1, "org.example.runtime", "1.0.0"), slot.clone());
    let levels = Arc::new(AtomicLevel::from_settings(&project_settings));
    let scr_logger = ScrLogger::new(&context, levels);

    if cli.tracing {
        slot.register(Arc::new(TracingLogService::new()));
    }

    let worker = BundleInfo::new(7, "acme.widget", "1.0.0");
    let unnamed = BundleInfo::unnamed(42);
    scr_logger.debug("starting with level {0}", &[Arg::value(&project_settings.log.level)])?;
    scr_logger.info("loaded {0} and {1}", &[Arg::from(&worker), Arg::from(&unnamed)])?;
    scr_logger.warn("pattern kept as is without arguments: {0}", &[])?;

    let failure = std::io::Error::other("component descriptor missing");
    scr_logger.log(
        Severity::ERROR,
        "cannot activate {0}",
        Some(&failure),
        &[Arg::from(&worker)],
    )?;

    scr_logger.close();

    Ok(())
}
