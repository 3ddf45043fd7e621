use clap::Parser;
use drip_edge::cli::{Cli, Commands};
use drip_edge::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize telemetry
    let _telemetry = drip_edge::telemetry::init_telemetry(&config.telemetry)?;
    if let Some(e) = load_error {
        let error = format!("{e:#}");
        tracing::warn!(path = %cli.config, error = %error, "Using default configuration");
    }

    match cli.command {
        Commands::Convert(args) => args.execute()?,
        Commands::Devig(args) => args.execute(&config)?,
        Commands::Edge(args) => args.execute()?,
        Commands::Rank(args) => {
            tracing::info!("Ranking fixtures");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
