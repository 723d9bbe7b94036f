use thiserror::Error;

/// Errors raised while configuring a shimmer.
///
/// Runtime "not ready" states (no bounds yet, no config, detached host) are
/// not errors; the drawable silently skips work in those cases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShimmerError {
    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },
    #[error("invalid shimmer preset: {0}")]
    Preset(String),
}

impl ShimmerError {
    pub(crate) fn invalid(what: &'static str, value: impl ToString) -> Self {
        Self::InvalidArgument { what, value: value.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, ShimmerError>;
