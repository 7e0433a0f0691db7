mod args;
mod config;

pub use args::{Args, Command, GreetArgs, InitArgs, RunArgs};
pub use config::GreeterConfig;
