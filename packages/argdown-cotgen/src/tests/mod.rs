//! Integration-level tests driving the pipeline from raw text down to rendered steps, bypassing
//! only the final trace formatting (`cot::format_trace` has its own unit tests).

mod round_trip;
mod scenarios;
mod strategies;

use crate::config::PipeType;
use crate::error::GenerationError;
use crate::parser;
use crate::strategy::{self, phrases::PhrasePool, Step};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs a pipe type end to end and returns the raw [`Step`]s instead of the formatted trace, so
/// tests can inspect individual steps without re-parsing the fenced output.
pub(crate) fn run_steps(pipe_type: PipeType, text: &str) -> Result<Vec<Step>, GenerationError> {
    run_steps_with(pipe_type, text, 0.0, None)
}

pub(crate) fn run_steps_with(
    pipe_type: PipeType,
    text: &str,
    p_abort: f64,
    seed: Option<u64>,
) -> Result<Vec<Step>, GenerationError> {
    let tree = parser::parse(text)?;
    pipe_type.check_tree_kind(&tree)?;
    let strategy = pipe_type.strategy(seed.unwrap_or(0), 0.2);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or(0));
    Ok(strategy::run(
        strategy.as_ref(),
        &tree,
        text,
        p_abort,
        Some(&mut rng),
        &PhrasePool::default(),
    )?)
}
