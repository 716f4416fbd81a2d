//! Command-line arguments.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "kurs",
    version,
    about = "Convert Indonesian Rupiah into foreign currencies at fixed rates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert a single IDR amount
    Convert {
        /// Amount in IDR, e.g. 100000 or 2500.50
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Target currency code (defaults to `default_currency` from config)
        #[arg(long, short)]
        to: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported currencies and their rates
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read amounts line by line (default)
    Interactive {
        /// Currency selected at start
        #[arg(long, short)]
        to: Option<String>,
    },
}
