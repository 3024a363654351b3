/// Source of the currently configured log threshold.
///
/// Implementations must be cheap and side-effect free; the facade queries
/// them on every log call.
pub trait LogLevelProvider: Send + Sync {
    /// Highest rank that is still emitted.
    fn current_max_rank(&self) -> u8;
}
