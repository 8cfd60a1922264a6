use clap::Parser;
use microbench_runner::benches::quicksort::InputPattern;
use microbench_runner::runner::DEFAULT_ITERATIONS;
use microbench_runner::{Algorithm, BenchConfig, BenchError, MonotonicClock};
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "microbench-runner", version)]
#[command(about = "Sequential micro-benchmark runner for pure functions (JSON output)")]
struct Args {
    /// Measured iterations per (variant, input size). Warmup is a tenth of this.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS as i64, allow_negative_numbers = true)]
    iterations: i64,

    /// Which built-in algorithm to measure.
    #[arg(long, value_enum, default_value_t = Algorithm::Fibonacci)]
    algorithm: Algorithm,

    /// Seed for generated inputs (quicksort).
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Arrangement of generated inputs (quicksort).
    #[arg(long, value_enum, default_value_t = InputPattern::Random)]
    pattern: InputPattern,

    /// Where to write the JSON report. If omitted, prints to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log each measured cell to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "microbench_runner=debug"
    } else {
        "microbench_runner=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(args: Args) -> Result<(), BenchError> {
    let cfg = BenchConfig::new(args.iterations, args.seed)?.with_pattern(args.pattern);
    if args.algorithm == Algorithm::Quicksort {
        info!(pattern = cfg.pattern().as_str(), seed = cfg.seed(), "input generation");
    }
    let report = args.algorithm.run(&cfg, &MonotonicClock::new())?;

    let json = report.to_json_pretty()?;
    if let Some(out) = args.out {
        fs::write(out, format!("{json}\n"))?;
    } else {
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
