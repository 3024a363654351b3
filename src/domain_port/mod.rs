mod console_sink;
mod context;
mod external_logger;
mod level_provider;

pub use console_sink::*;
pub use context::*;
pub use external_logger::*;
pub use level_provider::*;
