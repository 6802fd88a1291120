//! # Parking Runner
//!
//! Runs episodes of a registered parking variant with a scripted policy and
//! logs how each one ends. Useful to smoke-test configurations without a
//! learning setup.

mod app;
mod policy;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use crate::policy::PolicyKind;

#[derive(Parser, Debug)]
#[command(name = "parksim", about = "Run parking episodes headless")]
pub struct Args {
    /// Registered environment id
    #[arg(long, default_value = parking::PARKING_V0)]
    pub env: String,

    /// JSON file whose top-level options override the variant's configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 3)]
    pub episodes: u32,

    /// Seed of the first episode; later episodes continue the stream
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = PolicyKind::Seek)]
    pub policy: PolicyKind,

    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Print the registered environment ids and exit
    #[arg(long)]
    pub list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_max_level(args.log_level).init();
    app::run(&args)
}
