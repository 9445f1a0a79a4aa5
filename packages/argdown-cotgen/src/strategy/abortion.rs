//! The abortion perturbation: strictly post-hoc on already-rendered step text, so the tree and
//! view machinery stays pure. Operates only on the rendered `Step` list.

use super::phrases::PhrasePool;
use super::Step;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// With probability `p_abort`, picks a non-first step, inserts a duplicated block into a clone of
/// its content followed by the abort comment, then re-emits the original clean step. The first
/// step is never touched.
pub fn inject(steps: &mut Vec<Step>, p_abort: f64, rng: &mut ChaCha8Rng, pool: &PhrasePool) {
    if steps.len() < 2 {
        return;
    }
    if !rng.gen_bool(p_abort.clamp(0.0, 1.0)) {
        return;
    }

    // A non-first step: index 1..len.
    let idx = rng.gen_range(1..steps.len());
    let clean = steps[idx].clone();

    let lines: Vec<&str> = clean.content.lines().collect();
    if lines.is_empty() {
        return;
    }
    let mid = lines.len() / 2;
    let repeat_count = rng.gen_range(2..=4);
    let mut duplicated = String::new();
    for (i, line) in lines.iter().enumerate() {
        duplicated.push_str(line);
        duplicated.push('\n');
        if i == mid {
            for _ in 0..repeat_count {
                duplicated.push_str(line);
                duplicated.push('\n');
            }
        }
    }
    duplicated.push_str("// ");
    duplicated.push_str(&pool.abort_comment);

    // Version labels are placeholders here; splicing two steps in for one shifts everything
    // after `idx`, so the caller renumbers the whole list once this returns.
    let aborted_step = Step {
        version: clean.version.clone(),
        content: duplicated,
        explanation: clean.explanation.clone(),
    };
    let retry_step = Step {
        version: clean.version.clone(),
        content: clean.content.clone(),
        explanation: format!("{} {}", pool.retry_sentence, clean.explanation),
    };

    steps.splice(idx..=idx, [aborted_step, retry_step]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_steps() -> Vec<Step> {
        vec![
            Step {
                version: "v1".to_string(),
                content: "[Root]: A claim.".to_string(),
                explanation: "start".to_string(),
            },
            Step {
                version: "v2".to_string(),
                content: "[Root]: A claim.\n    <+ [Child]: A reason.".to_string(),
                explanation: "more".to_string(),
            },
        ]
    }

    #[test]
    fn never_touches_first_step_when_triggered() {
        let mut rng = <ChaCha8Rng as rand::SeedableRng>::seed_from_u64(42);
        let mut steps = sample_steps();
        inject(&mut steps, 1.0, &mut rng, &PhrasePool::default());
        assert_eq!(steps[0].content, "[Root]: A claim.");
    }

    #[test]
    fn no_op_with_zero_probability() {
        let mut rng = <ChaCha8Rng as rand::SeedableRng>::seed_from_u64(42);
        let mut steps = sample_steps();
        let before = steps.len();
        inject(&mut steps, 0.0, &mut rng, &PhrasePool::default());
        assert_eq!(steps.len(), before);
    }
}
