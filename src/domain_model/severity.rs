use std::fmt;
use std::str::FromStr;

/// Log severity, ranked the way log services rank them: the lower the rank,
/// the more severe the message.
///
/// Only the four named ranks have a meaning, but any rank can be carried
/// through; unrecognized ranks render with the `UNK` tag.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct Severity(u8);

impl Severity {
    pub const ERROR: Severity = Severity(1);
    pub const WARNING: Severity = Severity(2);
    pub const INFO: Severity = Severity(3);
    pub const DEBUG: Severity = Severity(4);

    pub const fn from_rank(rank: u8) -> Self {
        Self(rank)
    }

    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Five-character tag used by the console fallback.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::DEBUG => "DEBUG",
            Severity::INFO => "INFO ",
            Severity::WARNING => "WARN ",
            Severity::ERROR => "ERROR",
            _ => "UNK  ",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim_end())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown log level: {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::DEBUG),
            "info" => Ok(Severity::INFO),
            "warn" | "warning" => Ok(Severity::WARNING),
            "error" => Ok(Severity::ERROR),
            other => other
                .parse::<u8>()
                .map(Severity)
                .map_err(|_| ParseSeverityError(trimmed.to_owned())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
