use crate::domain_model::Bundle;
use crate::domain_port::ExternalLoggerLookup;
use std::sync::Arc;

/// What a component hands to its logger on construction.
pub trait ComponentContext {
    fn bundle(&self) -> &dyn Bundle;

    fn logger_lookup(&self) -> Arc<dyn ExternalLoggerLookup>;
}
