mod console;
mod context;
mod level;
mod logger_slot;
mod memory_log_service;
mod tracing_log_service;

pub use console::*;
pub use context::*;
pub use level::*;
pub use logger_slot::*;
pub use memory_log_service::*;
pub use tracing_log_service::*;
