//! Phrasing tables for placeholder comments and step explanations, keyed by strategy and stage so
//! tests can assert the pool is exercised without strategies embedding literal prose inline.

/// Placeholder comment shown under an argument-map node whose children haven't appeared yet.
pub fn map_placeholder(first_time: bool) -> &'static str {
    if first_time {
        "Arguments need to be added here."
    } else {
        "More arguments might need to be added here."
    }
}

/// Placeholder comment shown in an argument's still-empty premise region.
pub fn argument_premises_pending() -> &'static str {
    "Premises will be added later"
}

/// Explanation sentence for a map strategy's step, keyed by strategy name and stage index
/// (0-based, clamped to the table's last entry for any stage beyond what's enumerated).
pub fn map_explanation(strategy: &str, stage: usize) -> String {
    let pool: &[&str] = match strategy {
        "by_rank" => &[
            "I'll start with the root claims and arguments.",
            "I'll add all first-order reasons and arguments.",
            "Now I'll add the next layer of supporting and attacking material.",
            "I'll fill in the remaining layers of the map.",
        ],
        "breadth_first" => &[
            "I'll start from the roots and work outward level by level.",
            "I'll add the next node in breadth-first order.",
        ],
        "depth_first" => &[
            "I'll start from the roots and follow one line of reasoning at a time.",
            "I'll add the next node in depth-first order.",
        ],
        "by_objection" => &[
            "I'll start with the roots.",
            "I'll add the supporting scaffold.",
            "Now I'll bring in the direct objections to what's there so far.",
            "I'll bring in objections to those objections, and so on.",
        ],
        "random_diffusion" => &[
            "I'll sketch the map roughly first and correct it as I go.",
            "I'll fix one more misattributed edge.",
        ],
        "depth_diffusion" => &[
            "I'll lay out every claim and argument flat, with no structure yet.",
            "I'll attach the next layer of real parent-child relationships.",
        ],
        _ => &["I'll continue building out the map."],
    };
    let last = pool.len() - 1;
    pool[stage.min(last)].to_string()
}

/// Final explanation, appended once the fully-populated view is emitted.
pub fn map_final_explanation() -> &'static str {
    "I'll add in the remaining details, like inline data and comments, to complete the map."
}

/// Explanation sentence for an argument strategy's step, keyed by strategy name and a semantic
/// stage tag (`"title"`, `"scaffold"`, `"premises"`, ...) rather than a positional index: a
/// strategy's view list can have a variable number of expansion rounds (one per level of nested
/// sub-arguments), so the step's semantic role -- not its position in the list -- decides its
/// phrasing.
pub fn argument_explanation(strategy: &str, stage: &str) -> String {
    let table: &[(&str, &str)] = match strategy {
        "by_feature" => &[
            ("title", "I'll start with the argument's title and gist."),
            (
                "scaffold",
                "I'll sketch the final conclusion, with the premises still to come.",
            ),
            ("premises", "I'll lay out all the premises."),
            (
                "intermediate",
                "I'll mark which conclusions are only intermediate steps.",
            ),
            (
                "inference",
                "I'll note how each conclusion actually follows from what comes before it.",
            ),
            (
                "yaml",
                "I'll add in any inline data attached to individual statements.",
            ),
            ("comments", "I'll add in any remaining comments."),
        ],
        "by_feature_title_last" => &[
            (
                "scaffold",
                "I'll sketch the final conclusion, with the premises still to come.",
            ),
            ("premises", "I'll lay out all the premises."),
            (
                "intermediate",
                "I'll mark which conclusions are only intermediate steps.",
            ),
            (
                "inference",
                "I'll note how each conclusion actually follows from what comes before it.",
            ),
            (
                "yaml",
                "I'll add in any inline data attached to individual statements.",
            ),
            (
                "comments_and_title",
                "I'll add in any remaining comments, and finish with the argument's title and gist.",
            ),
        ],
        "by_rank" => &[
            ("title", "I'll start with the argument's title and gist."),
            (
                "scaffold",
                "I'll sketch the final conclusion, with its premises still to come.",
            ),
            (
                "premises",
                "I'll add the premises that feed directly into the final conclusion.",
            ),
            (
                "expand",
                "I'll expand any of those premises that are themselves conclusions of a sub-argument.",
            ),
            (
                "inference",
                "I'll note how each conclusion actually follows from what comes before it.",
            ),
            (
                "yaml",
                "I'll add in any inline data attached to individual statements.",
            ),
            ("comments", "I'll add in any remaining comments."),
        ],
        _ => &[("default", "I'll continue building out the argument.")],
    };
    table
        .iter()
        .find(|(key, _)| *key == stage)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| table.last().unwrap().1.to_string())
}

/// The comment injected by the abortion hook, immediately after the duplicated block.
pub fn abortion_comment() -> &'static str {
    "Oh no! This is just exactly what I've written before. Better ABORT and DISCARD this, and start anew."
}

/// The user-visible sentence following an abortion, before the clean step is re-emitted.
pub fn abortion_retry_sentence() -> &'static str {
    "I ignore the above Argdown snippet and will try again."
}

/// The pair of phrases used by the abortion hook, exposed on [`crate::config::Config`] so
/// embedders can swap in their own wording without touching the strategy framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePool {
    pub abort_comment: String,
    pub retry_sentence: String,
}

impl Default for PhrasePool {
    fn default() -> Self {
        Self {
            abort_comment: abortion_comment().to_string(),
            retry_sentence: abortion_retry_sentence().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_placeholder_distinguishes_first_and_later() {
        assert_ne!(map_placeholder(true), map_placeholder(false));
    }

    #[test]
    fn stage_beyond_pool_clamps_to_last() {
        let a = map_explanation("by_rank", 3);
        let b = map_explanation("by_rank", 50);
        assert_eq!(a, b);
    }
}
