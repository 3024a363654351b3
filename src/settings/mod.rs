//! Settings for the binaries. The facade itself only sees a
//! `LogLevelProvider`; see `bin/settings_demo.rs` for manual checks.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
