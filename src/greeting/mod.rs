//! Greeting composition
//!
//! [`GreeterService`] builds a greeting by handing the salutation and the name
//! to a [`StringJoiner`] and decorating the result.

mod joiner;
mod service;

pub use joiner::{StringJoiner, StringService};
pub use service::{GreeterService, SALUTATION, SMILEY};
