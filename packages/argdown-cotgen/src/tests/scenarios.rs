//! Concrete, hand-worked scenarios: exact step counts, exact explanations, and (where the
//! rendering is unambiguous) exact content, rather than just structural properties.

use super::{run_steps, run_steps_with};
use crate::config::PipeType;
use crate::error::{ConfigError, GenerationError};

#[test]
fn map_by_rank_on_a_root_with_one_child_takes_three_steps() {
    let input = "[Root]: A claim. // a note\n    <+ [Reason]: A reason.";
    let steps = run_steps(PipeType::MapByRank, input).unwrap();
    assert_eq!(steps.len(), 3);

    assert_eq!(
        steps[0].content,
        "[Root]: A claim.\n    // Arguments need to be added here."
    );
    assert_eq!(
        steps[0].explanation,
        "I'll start with the root claims and arguments."
    );

    assert_eq!(
        steps[1].content,
        "[Root]: A claim.\n    <+ [Reason]: A reason."
    );
    assert_eq!(
        steps[1].explanation,
        "I'll add all first-order reasons and arguments."
    );

    assert_eq!(steps[2].content, input);
    assert_eq!(
        steps[2].explanation,
        "I'll add in the remaining details, like inline data and comments, to complete the map."
    );
}

#[test]
fn single_root_claim_collapses_to_one_step() {
    let steps = run_steps(PipeType::MapByRank, "[Root]: Only claim.").unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].content, "[Root]: Only claim.");
}

#[test]
fn argument_by_rank_walks_outward_from_the_final_conclusion() {
    let input = "An argument about something.\n\n\
(1) Premise one.\n\
(2) Premise two.\n\
-- rule one --\n\
(3) An intermediate conclusion. {from: [1, 2]}\n\
(4) Premise four. // a footnote\n\
-- rule two --\n\
(5) The final conclusion. {from: [3, 4]}";

    let steps = run_steps(PipeType::ArgumentByRank, input).unwrap();
    assert_eq!(steps.len(), 7);

    // title
    assert_eq!(steps[0].content, "An argument about something.");
    // scaffold: only the final conclusion, renumbered to (1), with a pending-premises placeholder
    assert!(steps[1].content.contains("// Premises will be added later"));
    assert!(steps[1].content.contains("(1) The final conclusion."));

    // the statements feeding the final conclusion directly (3 and 4), not yet their own premises
    assert!(steps[2].content.contains("An intermediate conclusion."));
    assert!(steps[2].content.contains("Premise four."));
    assert!(!steps[2].content.contains("Premise one."));

    // expansion: every statement now visible, still no rule text or inline data
    assert!(steps[3].content.contains("Premise one."));
    assert!(steps[3].content.contains("Premise two."));
    assert!(!steps[3].content.contains("rule one"));

    // inference info: both separators now carry their rule text
    assert!(steps[4].content.contains("-- rule one --"));
    assert!(steps[4].content.contains("-- rule two --"));
    assert!(!steps[4].content.contains("{from:"));

    // yaml: the `from:` data appears, but the footnote comment still doesn't
    assert!(steps[5].content.contains("{from: [1, 2]}"));
    assert!(steps[5].content.contains("{from: [3, 4]}"));
    assert!(!steps[5].content.contains("a footnote"));

    // comments: fully reconstructs the original input
    assert_eq!(steps[6].content, input);
}

#[test]
fn pipe_type_input_kind_mismatch_is_rejected() {
    let err = run_steps(PipeType::ArgumentByRank, "[Root]: A claim.").unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Config(ConfigError::InputKindMismatch { .. })
    ));

    let err = run_steps(
        PipeType::MapByRank,
        "An argument.\n\n(1) A premise.\n----\n(2) A conclusion.",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Config(ConfigError::InputKindMismatch { .. })
    ));
}

#[test]
fn abortion_duplicates_a_block_and_retries_when_forced() {
    let input = "[Root]: A claim.\n    <+ [Reason]: A reason.\n    <- [Counter]: A counterpoint.";
    let clean = run_steps(PipeType::MapByRank, input).unwrap();
    let aborted = run_steps_with(PipeType::MapByRank, input, 1.0, Some(1)).unwrap();

    // one extra step: the aborted duplicate plus the retried clean step, in place of one clean
    // step from the unperturbed run.
    assert_eq!(aborted.len(), clean.len() + 1);
    assert!(aborted
        .iter()
        .any(|s| s.content.contains("Better ABORT and DISCARD this")));
    assert!(aborted
        .iter()
        .any(|s| s.explanation.starts_with("I ignore the above Argdown snippet")));
    assert_eq!(aborted.last().unwrap().content.trim_end(), input);
}
