use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GREETER: compose friendly greetings
///
/// Greets names given on the command line or listed in a YAML config file.
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version = "0.1.0")]
#[command(about = "Compose greetings for one or more names")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greet the names given as arguments
    Greet(GreetArgs),

    /// Greet every name listed in a config file
    Run(RunArgs),

    /// Generate a sample config file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct GreetArgs {
    /// Names to greet
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the config file (YAML)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Print the loaded config instead of greeting
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the config file
    #[arg(short, long, default_value = "greeter-config.yaml")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greet() {
        let args = Args::parse_from(["greeter", "greet", "Fred", "Wilma"]);
        match args.command {
            Command::Greet(greet) => assert_eq!(greet.names, vec!["Fred", "Wilma"]),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!args.verbose);
    }

    #[test]
    fn test_greet_requires_a_name() {
        assert!(Args::try_parse_from(["greeter", "greet"]).is_err());
    }

    #[test]
    fn test_parse_run_verbose() {
        let args = Args::parse_from(["greeter", "run", "-c", "names.yaml", "-v", "--dry-run"]);
        assert!(args.verbose);
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.config, PathBuf::from("names.yaml"));
                assert!(run.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_default_output() {
        let args = Args::parse_from(["greeter", "init"]);
        match args.command {
            Command::Init(init) => assert_eq!(init.output, PathBuf::from("greeter-config.yaml")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
