//! Process-wide `tracing` setup. See `bin/logger_demo.rs` for a binary that
//! exercises the bootstrap and reload path.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
