use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Search for a song by free-text query
    Search {
        query: String,
    },
    /// Generate the chord analysis and tutorial for a song
    Analyze {
        #[clap(short, long)]
        title: String,
        #[clap(short, long)]
        artist: String,
        #[clap(short, long)]
        duration: Option<u32>,
    },
}
