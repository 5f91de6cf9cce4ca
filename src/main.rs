//! Custom command dispatcher CLI
//!
//! Operator tooling for the command configuration: initialize a config file
//! with the built-in defaults, validate an existing one, and preview the
//! placeholder/markup pipeline for a template.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customcmd::{
    translate_color_codes, ActorContext, CommandsConfig, PlaceholderEngine, Result,
};

#[derive(Parser)]
#[command(name = "customcmd")]
#[command(author, version, about = "Config-driven custom command dispatcher", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a configuration file with the built-in default commands
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "config.toml")]
        output: String,
    },

    /// Validate the configuration and list the commands it defines
    Validate,

    /// Expand placeholders and markup in a template, without a host
    Preview {
        /// Template to expand
        #[arg(long)]
        template: String,

        /// Actor name substituted for %player%
        #[arg(long, default_value = "Steve")]
        player: String,

        /// Actor display name substituted for %displayname%
        #[arg(long)]
        display_name: Option<String>,

        /// World substituted for %world%
        #[arg(long, default_value = "world")]
        world: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { output } => {
            info!("Initializing command configuration at: {}", output);
            let config = CommandsConfig {
                commands: CommandsConfig::default_commands(),
            };
            config.save(&output)?;
            info!("Configuration saved successfully");
        }

        Commands::Validate => {
            let config = CommandsConfig::load(&cli.config)?;
            info!(
                "Configuration OK: {} commands defined",
                config.commands.len()
            );
            for (name, entry) in &config.commands {
                println!(
                    "/{}: {} messages, {} console messages, {} player commands, {} console commands, gated: {}",
                    name,
                    entry.messages.len(),
                    entry.console_messages.len(),
                    entry.player_commands.len(),
                    entry.console_commands.len(),
                    entry.use_permission,
                );
            }
        }

        Commands::Preview {
            template,
            player,
            display_name,
            world,
        } => {
            let display_name = display_name.unwrap_or_else(|| player.clone());
            let ctx = ActorContext::new(&player, &display_name, &world);
            let engine = PlaceholderEngine::new();
            let expanded = engine.expand(&template, &ctx);
            println!("{}", translate_color_codes(&expanded));
        }
    }

    Ok(())
}
