use super::joiner::{StringJoiner, StringService};
use crate::error::JoinError;

/// Prefix handed to the joiner ahead of the name
pub const SALUTATION: &str = "Hello, ";

/// Suffix appended to whatever the joiner returns
pub const SMILEY: &str = " :)";

/// Builds greetings for names
///
/// The prefix and name are joined by the configured [`StringJoiner`] and the
/// smiley is added afterwards. Joiner failures are returned as-is
pub struct GreeterService {
    string_joiner: Box<dyn StringJoiner>,
}

impl GreeterService {
    /// Create a greeter backed by [`StringService`]
    pub fn new() -> Self {
        Self::with_joiner(StringService)
    }

    /// Create a greeter backed by the given joiner
    pub fn with_joiner(joiner: impl StringJoiner + 'static) -> Self {
        Self {
            string_joiner: Box::new(joiner),
        }
    }

    /// Replace the joiner used by subsequent calls
    pub fn set_string_joiner(&mut self, joiner: impl StringJoiner + 'static) {
        self.string_joiner = Box::new(joiner);
    }

    /// Greet `name`, returning the joiner's error unchanged on failure
    pub fn make_greeting(&self, name: &str) -> Result<String, JoinError> {
        let greeting = self.string_joiner.concatenate(SALUTATION, name)?;
        Ok(add_smiley(greeting))
    }
}

impl Default for GreeterService {
    fn default() -> Self {
        Self::new()
    }
}

fn add_smiley(mut greeting: String) -> String {
    greeting.push_str(SMILEY);
    greeting
}
