use clap::Parser;

use crate::cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "closed-syncmers",
    version,
    about = "Find closed syncmers in a nucleotide sequence",
    long_about = None
)]
pub struct Cli {
    /// Nucleotide sequence (ACGT, case-insensitive; other symbols are read as A)
    pub sequence: String,

    /// K-mer length
    pub k: usize,

    /// S-mer length (must be less than K, at most 64)
    pub s: usize,

    /// Debug mode: non-zero prints the minimal s-mer position and k-mer for
    /// each row and cross-checks against the brute-force scan
    #[arg(default_value_t = 0)]
    pub debug: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn debug_enabled(&self) -> bool {
        self.debug != 0
    }
}
