//! rise-info - RisingOS about-screen info from the command line
//!
//! Initializes logging and configuration, then runs one subcommand.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rise_settings::commands::{
    load_config, DevicesCommand, InfoCommand, PropertySource, RingtoneCheckCommand, SpecsCommand,
};
use rise_settings::core::AppConfig;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Show RisingOS firmware and hardware info from a build.prop or a device
#[derive(Parser, Debug)]
#[command(name = "rise-info")]
#[command(version, about, long_about = None)]
struct Args {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Firmware build info (version, release type, maintainer, device)
    Info {
        /// Read properties from a build.prop file
        #[arg(long, value_name = "FILE", conflicts_with = "device")]
        props: Option<PathBuf>,

        /// Device serial to query over adb
        #[arg(short, long, value_name = "SERIAL")]
        device: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also list the raw ro.rising.* properties
        #[arg(long)]
        raw: bool,
    },

    /// Hardware summary (chipset, storage, battery, display)
    Specs {
        /// Read properties from a build.prop file (chipset only)
        #[arg(long, value_name = "FILE", conflicts_with = "device")]
        props: Option<PathBuf>,

        /// Device serial to query over adb
        #[arg(short, long, value_name = "SERIAL")]
        device: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List connected devices
    Devices,

    /// Check whether a picked ringtone would be stored as the default
    RingtoneCheck {
        /// Ringtone URI (omit to clear the default)
        #[arg(long)]
        uri: Option<String>,

        /// MIME type reported for the URI
        #[arg(long)]
        mime: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a default configuration file
    Init,
    /// Print the active configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    debug!("rise-info v{} starting", VERSION);

    if let Command::Config {
        action: ConfigAction::Init,
    } = args.command
    {
        let path = match args.config {
            Some(path) => path,
            None => AppConfig::config_file()
                .ok_or_else(|| anyhow::anyhow!("Cannot determine config path"))?,
        };
        AppConfig::default().save_to(&path).await?;
        info!("Wrote default configuration to {:?}", path);
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(args.config.as_deref()).await?;

    let output = match args.command {
        Command::Info {
            props,
            device,
            json,
            raw,
        } => {
            let source = PropertySource::select(props, device, &config);
            InfoCommand { source, json, raw }.execute(&config).await?
        }
        Command::Specs {
            props,
            device,
            json,
        } => {
            let source = PropertySource::select(props, device, &config);
            SpecsCommand { source, json }.execute(&config).await?
        }
        Command::Devices => DevicesCommand.execute(&config).await?,
        Command::RingtoneCheck { uri, mime } => RingtoneCheckCommand { uri, mime }.execute(),
        Command::Config {
            action: ConfigAction::Show,
        } => toml::to_string_pretty(&config)?,
        Command::Config {
            action: ConfigAction::Init,
        } => unreachable!("handled before loading configuration"),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
