//! Greeting composer with a swappable string-joining collaborator.

pub mod cli;
pub mod error;
pub mod greeting;

pub use error::JoinError;
pub use greeting::{GreeterService, StringJoiner, StringService};
