//! Main commands enum.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the search roots for the selected platform, highest priority first
    Paths,

    /// Resolve a logical file (or directory) name to a path
    Resolve {
        /// Logical name, e.g. "tiles.pbm" or "lang/"
        name: String,
        /// Resolve as a directory (no locale lookup)
        #[arg(long)]
        dir: bool,
    },

    /// List installed locale packs, default first
    Locales {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show every candidate path in probe order and whether it exists
    Candidates {
        /// Logical name, e.g. "tiles.pbm" or "lang/"
        name: String,
        /// Treat the name as a directory (no locale lookup)
        #[arg(long)]
        dir: bool,
    },
}
