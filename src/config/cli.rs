use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "varint-tool")]
#[command(about = "Encode and decode base-128 varint32 values and packed shorts", long_about = None)]
pub struct Cli {
    /// Print hex output in uppercase
    #[arg(long, global = true)]
    pub upper: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode each value as a varint32 (one hex line per value)
    Encode {
        #[arg(required = true)]
        values: Vec<u32>,
    },

    /// Decode consecutive varint32 values from hex, or from raw stdin
    Decode {
        #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
        hex: Option<String>,

        #[arg(long)]
        stdin: bool,
    },

    /// Pack a value in [0, 32767] into two big-endian bytes
    PackShort { value: u16 },

    /// Unpack two big-endian bytes (4 hex digits)
    UnpackShort { hex: String },
}
