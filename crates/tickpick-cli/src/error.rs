use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickpick_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Allocator(#[from] tickpick_core::AllocatorError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Broker(#[from] tickpick_core::BrokerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Allocator(_) => 3,
            Self::Serialization(_) => 4,
            Self::Broker(_) => 6,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(
            CliError::Validation(tickpick_core::ValidationError::EmptySymbol).exit_code(),
            2
        );
        assert_eq!(
            CliError::Allocator(tickpick_core::AllocatorError::NoCandidates).exit_code(),
            3
        );
        assert_eq!(
            CliError::Broker(tickpick_core::BrokerError::unavailable("down")).exit_code(),
            6
        );
    }
}
