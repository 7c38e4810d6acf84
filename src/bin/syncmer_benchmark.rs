//! Throughput benchmark: closed syncmer selection over random sequences.

use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::ThreadPoolBuilder;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use closed_syncmers::batch::count_batch;
use closed_syncmers::kmer::closed_syncmers;
use closed_syncmers::synthetic::random_sequences;
use closed_syncmers::SyncmerParams;

#[derive(Parser, Debug)]
#[command(name = "syncmer-benchmark", version, about = "Benchmark closed syncmer selection", long_about = None)]
struct Args {
    /// Number of random sequences to generate
    #[arg(long, default_value_t = 7000)]
    num_sequences: usize,

    /// Length of each sequence
    #[arg(long, default_value_t = 10_000)]
    length: usize,

    /// K-mer length
    #[arg(short, default_value_t = 2000)]
    k: usize,

    /// S-mer length
    #[arg(short, default_value_t = 40)]
    s: usize,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Process sequences in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of threads for --parallel
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting tracing default failed: {}", e);
    }

    let args = Args::parse();

    let params = match SyncmerParams::new(args.k, args.s) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if args.length < params.k() {
        warn!(
            "Sequence length {} is less than k={}; no syncmers will be found",
            args.length,
            params.k()
        );
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Generating {} sequences of length {}",
        args.num_sequences, args.length
    );
    let sequences = random_sequences(&mut rng, args.num_sequences, args.length);

    if args.parallel {
        if let Err(e) = ThreadPoolBuilder::new().num_threads(args.threads).build_global() {
            warn!("Failed to build thread pool: {}", e);
        }
        info!("Using {} threads", rayon::current_num_threads());
    }

    let start = Instant::now();
    let total: usize = if args.parallel {
        count_batch(&sequences, &params).iter().sum()
    } else {
        sequences
            .iter()
            .map(|seq| closed_syncmers(seq, &params).count())
            .sum()
    };
    let total_time = start.elapsed().as_secs_f64();

    let total_bytes = (args.num_sequences * args.length) as f64;
    let throughput = (total_bytes / (1024.0 * 1024.0)) / total_time;

    println!(
        "Processed {} sequences of length {} in {:.6} seconds",
        args.num_sequences, args.length, total_time
    );
    println!("Closed syncmers found: {}", total);
    println!("Throughput: {:.6} MB/s", throughput);
}
