use clap::Parser;
use dom_recon::cli::commands::{cmd_model, cmd_recon, cmd_scan, cmd_summary};
use dom_recon::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Scan {
            source,
            url_override,
            trace,
        } => {
            cmd_scan(&source, url_override.as_deref(), trace.as_deref(), &config)?;
        }
        Commands::Model { report, title } => {
            cmd_model(&report, title.as_deref(), &config)?;
        }
        Commands::Recon {
            source,
            url_override,
            trace,
        } => {
            cmd_recon(&source, url_override.as_deref(), trace.as_deref(), &config)?;
        }
        Commands::Summary { report } => {
            cmd_summary(&report)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean JSON. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dom_recon={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
