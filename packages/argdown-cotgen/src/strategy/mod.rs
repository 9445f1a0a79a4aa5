//! The strategy framework: the contract every reconstruction strategy implements, the shared
//! `Step` output type, abortion injection, and the registry that maps a configured `PipeType` to
//! a concrete strategy instance.

pub mod abortion;
pub mod argument;
pub mod map;
pub mod phrases;

use crate::error::StrategyError;
use crate::tree::Tree;
use phrases::PhrasePool;
use rand_chacha::ChaCha8Rng;

/// One emitted stage of the reconstruction: a version label, the rendered Argdown text, and the
/// natural-language sentence that precedes it in the trace.
#[derive(Debug, Clone)]
pub struct Step {
    pub version: String,
    pub content: String,
    pub explanation: String,
}

/// Implemented by every reconstruction strategy (one argument-map strategy, or one argument
/// strategy). Strategies read the tree; they never mutate it.
pub trait Strategy {
    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError>;

    /// Stable name used in error messages, the phrasing table, and test assertions.
    fn name(&self) -> &'static str;
}

/// Assigns version labels `v1..vN` to an ordered list of rendered `(content, explanation)` pairs.
pub fn number_steps(stages: Vec<(String, String)>) -> Vec<Step> {
    stages
        .into_iter()
        .enumerate()
        .map(|(i, (content, explanation))| Step {
            version: format!("v{}", i + 1),
            content,
            explanation,
        })
        .collect()
}

/// Collapses any run of consecutive stages whose rendered content is identical, keeping only the
/// last stage's explanation. A tree or argument with nothing left to add at some point would
/// otherwise produce two steps with byte-identical content back to back.
pub(crate) fn dedup_consecutive_stages(stages: &mut Vec<(String, String)>) {
    let mut i = 1;
    while i < stages.len() {
        if stages[i - 1].0 == stages[i].0 {
            stages.remove(i - 1);
        } else {
            i += 1;
        }
    }
}

/// Runs a strategy and, if configured, applies the abortion perturbation to its output. Verifies
/// the round-trip postcondition (final step reconstructs the original input) before returning.
pub fn run(
    strategy: &dyn Strategy,
    tree: &Tree,
    original: &str,
    p_abort: f64,
    rng: Option<&mut ChaCha8Rng>,
    pool: &PhrasePool,
) -> Result<Vec<Step>, StrategyError> {
    let mut steps = strategy.generate(tree)?;
    if steps.is_empty() {
        return Err(StrategyError::EmptySteps {
            strategy: strategy.name(),
        });
    }

    let final_content = steps.last().unwrap().content.trim_end();
    if final_content != original.trim_end() {
        return Err(StrategyError::RoundTripMismatch {
            strategy: strategy.name(),
        });
    }

    if let Some(rng) = rng {
        if p_abort > 0.0 {
            abortion::inject(&mut steps, p_abort, rng, pool);
            renumber(&mut steps);
        }
    }

    Ok(steps)
}

/// Reassigns `v1..vN` version labels in place, in source order. Abortion injection splices extra
/// steps into the middle of the list, which would otherwise leave a duplicated version label at
/// the injection point and never reach the true final version.
fn renumber(steps: &mut [Step]) {
    for (i, step) in steps.iter_mut().enumerate() {
        step.version = format!("v{}", i + 1);
    }
}
