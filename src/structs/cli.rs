use clap::Parser;

use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "chordcoach")]
#[clap(about = "AI-generated chord progressions and guitar tutorials", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
