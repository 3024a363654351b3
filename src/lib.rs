pub mod logger;
pub mod settings;

pub mod domain_model;
pub mod domain_port;
pub mod facade;
pub mod infra;

pub use domain_model::{Arg, Bundle, BundleInfo, Severity};
pub use facade::{LogError, ScrLogger};
