use crate::error::JoinError;

#[cfg(test)]
use mockall::automock;

/// Joins two strings
///
/// This is the only collaborator of [`GreeterService`](super::GreeterService);
/// swap it out to change how greetings are assembled, or to stub it in tests.
#[cfg_attr(test, automock)]
pub trait StringJoiner: Send + Sync {
    /// Returns `a` followed by `b`, with no separator
    fn concatenate(&self, a: &str, b: &str) -> Result<String, JoinError>;
}

/// Default joiner: plain concatenation
#[derive(Debug, Clone, Copy, Default)]
pub struct StringService;

impl StringJoiner for StringService {
    fn concatenate(&self, a: &str, b: &str) -> Result<String, JoinError> {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenate() {
        let service = StringService;
        assert_eq!(service.concatenate("Hello, ", "Fred").unwrap(), "Hello, Fred");
    }

    #[test]
    fn test_concatenate_no_separator() {
        let service = StringService;
        assert_eq!(service.concatenate("ab", "cd").unwrap(), "abcd");
    }

    #[test]
    fn test_concatenate_empty() {
        let service = StringService;
        assert_eq!(service.concatenate("", "").unwrap(), "");
        assert_eq!(service.concatenate("Hello, ", "").unwrap(), "Hello, ");
        assert_eq!(service.concatenate("", "Fred").unwrap(), "Fred");
    }
}
