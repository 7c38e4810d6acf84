mod cli;
mod cli_main;

use std::io::{self, BufWriter, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use cli_main::Cli;
use closed_syncmers::kmer::compute_with_params;
use closed_syncmers::{compute_closed_syncmers_naive, SyncmerError, SyncmerParams};

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting tracing default failed: {}", e);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let params = SyncmerParams::new(cli.k, cli.s)?;
    let seq = cli.sequence.as_bytes();

    info!(
        "Scanning {} bases for closed syncmers (k={}, s={})",
        seq.len(),
        params.k(),
        params.s()
    );

    // A short sequence is reported but still produces (empty) output
    let records = match compute_with_params(seq, &params) {
        Ok(records) => records,
        Err(e @ SyncmerError::SequenceTooShort { .. }) => {
            warn!("{}", e);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    if cli.debug_enabled() && !records.is_empty() {
        let reference = compute_closed_syncmers_naive(seq, params.k(), params.s())?;
        if reference == records {
            debug!("Brute-force scan agrees: {} records", reference.len());
        } else {
            warn!(
                "Brute-force scan disagrees: {} records vs {}",
                reference.len(),
                records.len()
            );
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    cli::output::write_records(&mut out, seq, &params, &records, cli.format, cli.debug_enabled())?;
    out.flush()?;

    info!("Found {} closed syncmers", records.len());
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose || cli.debug_enabled());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
