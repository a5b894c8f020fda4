//! Application Configuration

use std::time::Duration;

use crate::domain::value_objects::FailMode;

/// Maximum accepted player message length, in characters
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Guardian application configuration
#[derive(Debug, Clone)]
pub struct GuardianConfig {
    /// Canned text shown in place of a blocked message or reply
    pub refusal_message: String,
    /// Upper bound on one classifier call
    pub classifier_timeout: Duration,
    /// Upper bound on the main chat completion
    pub chat_timeout: Duration,
    /// Resolution when the classifier cannot answer for an inbound message
    pub input_fail_mode: FailMode,
    /// Resolution when the classifier cannot answer for an outbound reply
    pub output_fail_mode: FailMode,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            refusal_message: "The guardian narrows its eyes. \"Nice try, challenger, \
                but I will not speak of that.\""
                .to_string(),
            classifier_timeout: Duration::from_secs(10),
            chat_timeout: Duration::from_secs(30),
            input_fail_mode: FailMode::Open,
            output_fail_mode: FailMode::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fail_modes_bias_against_leaks() {
        let config = GuardianConfig::default();
        assert_eq!(config.input_fail_mode, FailMode::Open);
        assert_eq!(config.output_fail_mode, FailMode::Closed);
    }
}
