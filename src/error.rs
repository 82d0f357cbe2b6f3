use thiserror::Error;

/// Errors raised while configuring a tracer or the input generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("insertion step must be positive")]
    InvalidStep,
    #[error("value range [{min}, {max}) is empty")]
    EmptyRange { min: u32, max: u32 },
    #[error("unknown algorithm `{0}` (expected bubble, selection, insertion or merge)")]
    UnknownAlgorithm(String),
}
