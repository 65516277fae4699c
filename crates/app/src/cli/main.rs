//! Passerelle CLI Application
//!
//! Diagnostic front end for the conversion engine: feed it a wire object
//! as JSON and it prints the native form, optionally converting back to
//! verify the round trip.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use passerelle_core::convert;
use passerelle_core::domain::wire::{WirePatch, WirePortConfig};

#[derive(Parser)]
#[command(name = "passerelle")]
#[command(about = "Wire/native conversion inspector", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a wire port config to its native form
    PortConfig {
        /// JSON file holding the wire value
        file: PathBuf,

        /// Convert back to the wire form and check the round trip
        #[arg(long)]
        roundtrip: bool,
    },
    /// Convert a wire patch to its native form
    Patch {
        /// JSON file holding the wire value
        file: PathBuf,

        /// Convert back to the wire form and check the round trip
        #[arg(long)]
        roundtrip: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    match cli.command {
        Command::PortConfig { file, roundtrip } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let wire: WirePortConfig =
                serde_json::from_str(&text).context("file is not a wire port config")?;
            let native = convert::port_config_from_wire(&wire)
                .context("wire port config does not convert")?;
            println!("{native:#?}");
            if roundtrip {
                let back = convert::port_config_to_wire(&native)
                    .context("native port config does not convert back")?;
                report_roundtrip(back == wire);
            }
        }
        Command::Patch { file, roundtrip } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let wire: WirePatch =
                serde_json::from_str(&text).context("file is not a wire patch")?;
            let native = convert::patch_from_wire(&wire).context("wire patch does not convert")?;
            println!("{native:#?}");
            if roundtrip {
                let back =
                    convert::patch_to_wire(&native).context("native patch does not convert back")?;
                report_roundtrip(back == wire);
            }
        }
    }

    Ok(())
}

fn report_roundtrip(clean: bool) {
    if clean {
        tracing::info!("round trip reproduced the wire value");
    } else {
        tracing::warn!("round trip diverged from the wire value");
    }
}
