use clap::{Parser, Subcommand};

/// colorsync: convert colors between HEX, RGB and HSL.
#[derive(Parser, Debug)]
#[command(name = "colorsync", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a color the way a paste would and print every notation.
    Convert {
        /// Text containing a hex, rgb() or hsl() color.
        text: String,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
