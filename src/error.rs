use std::fmt;
use thiserror::Error;

/// Error returned by a benchmark candidate. Any error type converts into it.
pub type CandidateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which part of a run a candidate failed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Measure,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Warmup => f.write_str("warmup"),
            Phase::Measure => f.write_str("measurement"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// `iteration` counts from 1 within the failing phase.
    #[error(
        "{algorithm}/{variant} failed at n={n} during {phase} (iteration {iteration}): {source}"
    )]
    CandidateFailure {
        algorithm: String,
        variant: String,
        n: u64,
        phase: Phase,
        iteration: u64,
        #[source]
        source: CandidateError,
    },

    #[error("result for {variant} at n={n} was recorded more than once")]
    DuplicateResult { variant: String, n: u64 },

    #[error("no result recorded for {variant} at n={n}")]
    MissingResult { variant: String, n: u64 },

    #[error("{variant} at n={n} is not part of this report")]
    UnknownResult { variant: String, n: u64 },

    #[error("failed to encode report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    pub fn configuration(message: impl Into<String>) -> Self {
        BenchError::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
