mod arg;
mod bundle;
mod record;
mod severity;

pub use arg::*;
pub use bundle::*;
pub use record::*;
pub use severity::*;
