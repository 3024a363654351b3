use bundle_logger::domain_model::{BundleInfo, Severity};
use bundle_logger::facade::ScrLogger;
use bundle_logger::infra::{AtomicLevel, LoggerSlot, StaticContext};
use bundle_logger::settings::*;
use std::sync::Arc;

// $ cargo run --bin settings_demo -- --settings=settings/release.toml
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let is_err = parse_settings(Some("settings/missing.toml")).is_err();
    println!("Error on invalid path: {:?}", is_err);

    let project_settings = parse_settings(cli.settings.as_deref())?;
    println!("Loaded settings: {:?}", project_settings);

    let levels = Arc::new(AtomicLevel::from_settings(&project_settings));
    let context = StaticContext::new(BundleInfo::unnamed(0), Arc::new(LoggerSlot::new()));
    let scr_logger = ScrLogger::new(&context, levels.clone());

    for severity in [Severity::ERROR, Severity::WARNING, Severity::INFO, Severity::DEBUG] {
        println!("{severity} enabled at {}: {}", levels.get(), scr_logger.is_enabled(severity));
    }
    scr_logger.info("printed when log.level is info or debug", &[])?;
    scr_logger.debug("printed only when log.level is debug", &[])?;

    scr_logger.close();
    Ok(())
}
