use super::PatternError;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("log service failed: {0}")]
    Backend(#[from] anyhow::Error),
}
