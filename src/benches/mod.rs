//! Built-in benchmark candidates.

use crate::error::CandidateError;
use crate::harness::StateScope;


/// One implementation strategy of an algorithm, measured as a variant.
///
/// State is owned by the caller: the runner asks for it through
/// [`Candidate::new_state`] at the start of every run (or every iteration,
/// depending on [`Candidate::state_scope`]) and never shares it between runs.
pub trait Candidate {
    type State;
    type Output;

    fn label(&self) -> &'static str;

    /// Whether this variant should be measured at input size `n`. Sizes it
    /// rejects are reported as skipped.
    fn supports(&self, n: u64) -> bool {
        let _ = n;
        true
    }

    fn state_scope(&self) -> StateScope {
        StateScope::PerRun
    }

    fn new_state(&self, n: u64) -> Self::State;

    fn invoke(&self, state: &mut Self::State, n: u64) -> Result<Self::Output, CandidateError>;
}
