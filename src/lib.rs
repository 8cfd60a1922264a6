use clap::ValueEnum;

pub mod benches;
pub mod emitter;
pub mod error;
pub mod harness;
pub mod runner;
pub mod schema;
pub mod stats;

pub use error::{BenchError, CandidateError, Result};
pub use harness::{Clock, MonotonicClock};
pub use runner::{run_suite, BenchConfig};
pub use schema::ReportDocument;

/// Built-in algorithm to benchmark.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum Algorithm {
    /// Iterative, recursive, memoized and matrix Fibonacci.
    #[default]
    Fibonacci,
    /// Lomuto, three-way, allocating and std sorts over seeded, patterned input.
    Quicksort,
}

impl Algorithm {
    /// Runs the algorithm's full suite with the given clock.
    pub fn run<K: Clock + ?Sized>(self, cfg: &BenchConfig, clock: &K) -> Result<ReportDocument> {
        match self {
            Algorithm::Fibonacci => run_suite(cfg, clock, &benches::fibonacci::suite()),
            Algorithm::Quicksort => {
                let suite = benches::quicksort::suite(cfg.seed(), cfg.pattern());
                run_suite(cfg, clock, &suite)
            }
        }
    }
}
