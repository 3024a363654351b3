//! The logger every component uses: forwards to an external log service
//! when one is available and prints to the console otherwise.

mod error;
mod pattern;
mod scr_logger;

pub use error::*;
pub use pattern::*;
pub use scr_logger::*;
