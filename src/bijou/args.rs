use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "bijou", version, long_version = LONG_VERSION)]
#[command(about = "Render product descriptions and price metal purity levels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to $BIJOU_HOME, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a description file (HTML, editor JSON or other JSON) to HTML
    #[command(alias = "r")]
    Render {
        /// File holding the description
        file: PathBuf,

        /// Escape text, styles and URLs in the generated HTML
        #[arg(long, conflicts_with = "raw")]
        escape: bool,

        /// Interpolate text verbatim even if escaping is configured
        #[arg(long)]
        raw: bool,
    },

    /// Print the plain text of a description file
    #[command(alias = "t")]
    Text {
        /// File holding the description
        file: PathBuf,

        /// Truncate to the configured preview width
        #[arg(short, long)]
        preview: bool,

        /// Truncate to this many display columns
        #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        width: Option<usize>,
    },

    /// Price a product at one karat
    #[command(alias = "p")]
    Price {
        /// JSON file with one metal, an array of metals, or a list response
        file: PathBuf,

        /// Karat to price (e.g. 14, 18K)
        #[arg(short, long)]
        karat: String,

        /// Base price of the product
        #[arg(short, long)]
        base: f64,

        /// Metal name when the file holds several metals
        #[arg(short, long)]
        metal: Option<String>,
    },

    /// Show the price at every purity level of a metal
    #[command(alias = "ls")]
    Levels {
        /// JSON file with one metal, an array of metals, or a list response
        file: PathBuf,

        /// Base price of the product
        #[arg(short, long)]
        base: f64,

        /// Metal name when the file holds several metals
        #[arg(short, long)]
        metal: Option<String>,

        /// Only list active purity levels
        #[arg(long)]
        active: bool,
    },

    /// Validate metals the way the admin form does
    Check {
        /// JSON file with one metal, an array of metals, or a list response
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (escape-html, preview-width, currency, price-precision)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
