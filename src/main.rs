use anyhow::Result;
use clap::Parser;
use greeter::cli::{self, Args, Command, GreeterConfig};
use greeter::GreeterService;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Greet(greet_args) => {
            greet_names(&greet_args.names)?;
        }
        Command::Run(run_args) => {
            run_config(run_args)?;
        }
        Command::Init(init_args) => {
            generate_sample_config(init_args)?;
        }
    }

    Ok(())
}

fn greet_names(names: &[String]) -> Result<()> {
    let greeter = GreeterService::new();

    for name in names {
        debug!("Greeting {:?}", name);
        println!("{}", greeter.make_greeting(name)?);
    }

    Ok(())
}

fn run_config(args: cli::RunArgs) -> Result<()> {
    info!("Loading greeter config from {:?}", args.config);

    let config = GreeterConfig::load(&args.config)?;

    if args.dry_run {
        println!("Dry run mode - no greetings will be printed");
        println!("\nConfiguration:");
        println!("  Name: {}", config.name);
        if !config.description.is_empty() {
            println!("  Description: {}", config.description);
        }
        println!("  Names: {}", config.names.len());
        for name in &config.names {
            println!("  - {}", name);
        }
        return Ok(());
    }

    if config.names.is_empty() {
        warn!("Config {:?} lists no names", config.name);
        return Ok(());
    }

    info!("Greeting {} names from '{}'", config.names.len(), config.name);
    greet_names(&config.names)
}

fn generate_sample_config(args: cli::InitArgs) -> Result<()> {
    let config = GreeterConfig::sample();

    config.save(&args.output)?;
    println!("Generated sample config at: {:?}", args.output);

    Ok(())
}
