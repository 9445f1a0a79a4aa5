//! Universal properties that must hold for every pipe type, not just the scenarios in
//! `scenarios.rs`: the round-trip guarantee, monotonic growth, and version bookkeeping.

use super::run_steps;
use crate::config::PipeType;

const MAPS: &[&str] = &[
    "[Root]: A claim.",
    "[Root]: A claim.\n    <+ [Reason]: A reason.\n    <- [Counter]: A counterpoint.",
    "[Root]: A claim. {tag: important}\n    <+ <Argument>: An argument.\n        <+ [Sub]: A sub-reason.",
];

const ARGUMENTS: &[&str] = &[
    "An argument about something.\n\n(1) A premise.\n(2) Another premise.\n----\n(3) A conclusion.",
    "An argument with a rule.\n\n(1) A premise.\n(2) Another premise.\n-- modus ponens --\n(3) An intermediate conclusion.\n(4) A further premise.\n----\n(5) The final conclusion.",
];

#[test]
fn map_strategies_round_trip_on_every_sample() {
    for pipe_type in [
        PipeType::MapByRank,
        PipeType::MapBreadthFirst,
        PipeType::MapDepthFirst,
        PipeType::MapByObjection,
        PipeType::MapDepthDiffusion,
    ] {
        for input in MAPS {
            let steps = run_steps(pipe_type, input)
                .unwrap_or_else(|e| panic!("{pipe_type:?} failed on {input:?}: {e:?}"));
            assert!(!steps.is_empty());
            assert_eq!(steps.last().unwrap().content.trim_end(), input.trim_end());
        }
    }
}

#[test]
fn argument_strategies_round_trip_on_every_sample() {
    for pipe_type in [PipeType::ArgumentByFeature, PipeType::ArgumentByRank] {
        for input in ARGUMENTS {
            let steps = run_steps(pipe_type, input)
                .unwrap_or_else(|e| panic!("{pipe_type:?} failed on {input:?}: {e:?}"));
            assert!(!steps.is_empty());
            assert_eq!(steps.last().unwrap().content.trim_end(), input.trim_end());
        }
    }
}

#[test]
fn version_labels_are_contiguous_with_no_gaps() {
    let steps = run_steps(
        PipeType::MapByRank,
        "[Root]: A claim.\n    <+ [Reason]: A reason.",
    )
    .unwrap();
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.version, format!("v{}", i + 1));
    }
}

#[test]
fn every_step_carries_a_non_empty_explanation() {
    for pipe_type in [PipeType::MapByRank, PipeType::ArgumentByRank] {
        let input = match pipe_type {
            PipeType::ArgumentByRank => {
                "An argument.\n\n(1) A premise.\n(2) Another premise.\n----\n(3) A conclusion."
            }
            _ => "[Root]: A claim.\n    <+ [Reason]: A reason.",
        };
        let steps = run_steps(pipe_type, input).unwrap();
        for step in &steps {
            assert!(!step.explanation.trim().is_empty());
        }
    }
}

#[test]
fn abortion_never_breaks_the_final_round_trip() {
    let input = "[Root]: A claim.\n    <+ [Reason]: A reason.\n    <- [Counter]: A counterpoint.";
    let clean = run_steps(PipeType::MapByRank, input).unwrap();
    let aborted = super::run_steps_with(PipeType::MapByRank, input, 1.0, Some(7)).unwrap();
    assert_eq!(aborted.last().unwrap().content.trim_end(), input.trim_end());
    // An abortion, when it fires, never touches the first step.
    assert_eq!(aborted[0].content.trim_end(), clean[0].content.trim_end());
}

#[test]
fn abortion_renumbers_steps_with_no_gaps_or_duplicates() {
    let input = "[Root]: A claim.\n    <+ [Reason]: A reason.\n    <- [Counter]: A counterpoint.";
    // A forced abortion splices two extra steps into the list; the version labels must still
    // run v1..vN with no repeats and no gaps once that's done.
    for seed in [1, 7, 42, 99] {
        let aborted = super::run_steps_with(PipeType::MapByRank, input, 1.0, Some(seed)).unwrap();
        let versions: Vec<&str> = aborted.iter().map(|s| s.version.as_str()).collect();
        let expected: Vec<String> = (1..=versions.len()).map(|i| format!("v{i}")).collect();
        assert_eq!(versions, expected, "seed {seed} produced non-contiguous versions");
        assert_eq!(
            aborted.last().unwrap().version,
            format!("v{}", aborted.len()),
            "seed {seed} never reached its true final version"
        );
    }
}

#[test]
fn quoted_yaml_string_scalars_round_trip_byte_exact() {
    let input = r#"[Root]: A claim. {tag: "foo, bar"}
    <+ [Reason]: A reason."#;
    for pipe_type in [PipeType::MapByRank, PipeType::MapBreadthFirst] {
        let steps = run_steps(pipe_type, input).unwrap();
        assert_eq!(steps.last().unwrap().content.trim_end(), input.trim_end());
    }
}
