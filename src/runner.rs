use tracing::{debug, info};

use crate::benches::quicksort::InputPattern;
use crate::benches::Candidate;
use crate::emitter::{ReportMeta, ResultEmitter};
use crate::error::{BenchError, Result};
use crate::harness::{run_spec, BenchSpec, Clock};
use crate::schema::{Cell, ReportDocument};
use crate::stats::Summary;

/// Language label written into every report.
pub const LANGUAGE: &str = "rust";

pub const DEFAULT_ITERATIONS: u64 = 1_000;

/// Validated run-wide settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    iterations: u64,
    seed: u64,
    pattern: InputPattern,
}

impl BenchConfig {
    /// Accepts any signed count so non-positive input is reported here rather
    /// than by the argument parser.
    pub fn new(iterations: i64, seed: u64) -> Result<Self> {
        if iterations <= 0 {
            return Err(BenchError::configuration(format!(
                "--iterations must be a positive integer (got {iterations})"
            )));
        }
        Ok(Self {
            iterations: iterations.unsigned_abs(),
            seed,
            pattern: InputPattern::default(),
        })
    }

    pub fn with_pattern(mut self, pattern: InputPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// One tenth of the measured iterations.
    pub fn warmup_iters(&self) -> u64 {
        self.iterations / 10
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Arrangement of generated sort inputs.
    pub fn pattern(&self) -> InputPattern {
        self.pattern
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: 0,
            pattern: InputPattern::default(),
        }
    }
}

/// An algorithm, the sizes it is measured at, and its variants.
#[derive(Clone, Debug)]
pub struct Suite<C> {
    pub algorithm: &'static str,
    pub sizes: Vec<u64>,
    pub variants: Vec<C>,
}

/// Measures one (variant, n) cell.
pub fn measure_cell<C, K>(
    cfg: &BenchConfig,
    clock: &K,
    algorithm: &str,
    candidate: &C,
    n: u64,
) -> Result<Summary>
where
    C: Candidate,
    K: Clock + ?Sized,
{
    let spec = BenchSpec::new(
        algorithm,
        candidate.label(),
        n,
        cfg.iterations(),
        cfg.warmup_iters(),
    )?
    .with_state_scope(candidate.state_scope());

    let sample = run_spec(
        &spec,
        clock,
        || candidate.new_state(n),
        |state| candidate.invoke(state, n),
    )?;
    Ok(Summary::from_sample(&sample))
}

/// Runs every variant at every size, in order. The first failure aborts the
/// whole run and nothing accumulated so far is reported.
pub fn run_suite<C, K>(cfg: &BenchConfig, clock: &K, suite: &Suite<C>) -> Result<ReportDocument>
where
    C: Candidate,
    K: Clock + ?Sized,
{
    info!(
        algorithm = suite.algorithm,
        iterations = cfg.iterations(),
        warmup = cfg.warmup_iters(),
        sizes = suite.sizes.len(),
        variants = suite.variants.len(),
        "starting benchmark run"
    );

    let mut emitter = ResultEmitter::new(
        ReportMeta {
            algorithm: suite.algorithm.to_string(),
            language: LANGUAGE.to_string(),
            iterations: cfg.iterations(),
        },
        suite.variants.iter().map(Candidate::label),
        suite.sizes.iter().copied(),
    );

    for &n in &suite.sizes {
        for candidate in &suite.variants {
            let variant = candidate.label();
            if !candidate.supports(n) {
                debug!(variant, n, "skipped: size not supported");
                emitter.record(variant, n, Cell::Skipped)?;
                continue;
            }

            let summary = measure_cell(cfg, clock, suite.algorithm, candidate, n)?;
            debug!(
                variant,
                n,
                mean_us = summary.mean_us(),
                min_ns = summary.min_ns,
                max_ns = summary.max_ns,
                std_dev_ns = summary.std_dev_ns,
                "measured"
            );
            emitter.record(variant, n, Cell::Measured(summary.mean_us()))?;
        }
    }

    let report = emitter.finalize()?;
    info!(algorithm = suite.algorithm, rows = report.results.len(), "benchmark run complete");
    Ok(report)
}
