//! Timing primitives: one timed call, the warmup phase, and the measured
//! iteration loop. Everything here runs on the calling thread, in order.

use std::cell::Cell;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::{BenchError, CandidateError, Phase, Result};

/// Monotonic time source. `now` is relative to an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Candidates can advance it to simulate
/// a fixed cost per call.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// How often the caller-owned candidate state is rebuilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StateScope {
    /// Built once per run and reused by warmup and every iteration.
    #[default]
    PerRun,
    /// Rebuilt before every invocation, outside the timed bracket.
    PerIteration,
}

/// Identifies one measurement run: a single (variant, n) cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchSpec {
    algorithm: String,
    variant: String,
    n: u64,
    iterations: u64,
    warmup: u64,
    state_scope: StateScope,
}

impl BenchSpec {
    pub fn new(
        algorithm: impl Into<String>,
        variant: impl Into<String>,
        n: u64,
        iterations: u64,
        warmup: u64,
    ) -> Result<Self> {
        if iterations == 0 {
            return Err(BenchError::configuration(
                "iterations must be greater than zero",
            ));
        }
        Ok(Self {
            algorithm: algorithm.into(),
            variant: variant.into(),
            n,
            iterations,
            warmup,
            state_scope: StateScope::default(),
        })
    }

    pub fn with_state_scope(mut self, scope: StateScope) -> Self {
        self.state_scope = scope;
        self
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn warmup(&self) -> u64 {
        self.warmup
    }

    pub fn state_scope(&self) -> StateScope {
        self.state_scope
    }

    fn failure(&self, phase: Phase, iteration: u64, source: CandidateError) -> BenchError {
        BenchError::CandidateFailure {
            algorithm: self.algorithm.clone(),
            variant: self.variant.clone(),
            n: self.n,
            phase,
            iteration,
            source,
        }
    }
}

/// Per-iteration durations in nanoseconds, in invocation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DurationSample {
    nanos: Vec<u64>,
}

impl DurationSample {
    pub fn from_nanos(nanos: Vec<u64>) -> Self {
        Self { nanos }
    }

    pub fn as_nanos(&self) -> &[u64] {
        &self.nanos
    }

    pub fn len(&self) -> usize {
        self.nanos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nanos.is_empty()
    }
}

/// Hands out candidate state according to a [`StateScope`].
pub struct StateSource<S, F> {
    scope: StateScope,
    factory: F,
    current: Option<S>,
}

impl<S, F: FnMut() -> S> StateSource<S, F> {
    pub fn new(scope: StateScope, factory: F) -> Self {
        Self {
            scope,
            factory,
            current: None,
        }
    }

    pub fn next(&mut self) -> &mut S {
        match self.scope {
            StateScope::PerRun => self.current.get_or_insert_with(&mut self.factory),
            StateScope::PerIteration => self.current.insert((self.factory)()),
        }
    }
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Times exactly one call of `f`. The output is discarded after the clock
/// stops; an error is returned without a measurement.
pub fn time_once<C, T, E>(clock: &C, f: impl FnOnce() -> Result<T, E>) -> Result<u64, E>
where
    C: Clock + ?Sized,
{
    let start = clock.now();
    let out = f();
    let end = clock.now();
    black_box(out?);
    Ok(saturating_nanos(end.saturating_sub(start)))
}

/// Runs `spec.warmup()` untimed invocations. No-op when the warmup is zero.
pub fn warm_up<S, F, T>(
    spec: &BenchSpec,
    states: &mut StateSource<S, F>,
    f: &mut impl FnMut(&mut S) -> Result<T, CandidateError>,
) -> Result<()>
where
    F: FnMut() -> S,
{
    for i in 0..spec.warmup() {
        let state = states.next();
        match f(state) {
            Ok(out) => {
                black_box(out);
            }
            Err(e) => return Err(spec.failure(Phase::Warmup, i + 1, e)),
        }
    }
    Ok(())
}

/// Times `spec.iterations()` sequential invocations. The first failure aborts
/// the run and no sample is returned.
pub fn run_iterations<C, S, F, T>(
    spec: &BenchSpec,
    clock: &C,
    states: &mut StateSource<S, F>,
    f: &mut impl FnMut(&mut S) -> Result<T, CandidateError>,
) -> Result<DurationSample>
where
    C: Clock + ?Sized,
    F: FnMut() -> S,
{
    let mut nanos = Vec::with_capacity(usize::try_from(spec.iterations()).unwrap_or(0));
    for i in 0..spec.iterations() {
        let state = states.next();
        let elapsed = time_once(clock, || f(state))
            .map_err(|e| spec.failure(Phase::Measure, i + 1, e))?;
        nanos.push(elapsed);
    }
    Ok(DurationSample { nanos })
}

/// Warmup followed by measurement, with state built fresh for this run.
pub fn run_spec<C, S, T>(
    spec: &BenchSpec,
    clock: &C,
    factory: impl FnMut() -> S,
    mut f: impl FnMut(&mut S) -> Result<T, CandidateError>,
) -> Result<DurationSample>
where
    C: Clock + ?Sized,
{
    let mut states = StateSource::new(spec.state_scope(), factory);
    warm_up(spec, &mut states, &mut f)?;
    run_iterations(spec, clock, &mut states, &mut f)
}
