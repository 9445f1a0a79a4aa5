//! Per-strategy behavioural checks that don't belong in the cross-cutting round-trip properties:
//! strategy-specific ordering guarantees and edge cases each strategy documents for itself.

use super::run_steps;
use crate::config::PipeType;

const OBJECTION_MAP: &str = "[Root]: A claim.\n\
    <+ <Support>: A supporting argument.\n\
    <- [Objection]: An objection.\n\
        <- [Rebuttal]: A rebuttal of the objection.";

#[test]
fn by_objection_shows_the_supporting_scaffold_before_any_objection() {
    let steps = run_steps(PipeType::MapByObjection, OBJECTION_MAP).unwrap();
    let first_step_with_support = steps
        .iter()
        .position(|s| s.content.contains("A supporting argument."))
        .expect("the supporting argument appears in some step");
    let first_step_with_objection = steps
        .iter()
        .position(|s| s.content.contains("An objection."))
        .expect("the objection appears in some step");
    assert!(first_step_with_support < first_step_with_objection);
}

#[test]
fn by_objection_shows_the_rebuttal_only_after_its_objection() {
    let steps = run_steps(PipeType::MapByObjection, OBJECTION_MAP).unwrap();
    let first_step_with_objection = steps
        .iter()
        .position(|s| s.content.contains("An objection."))
        .unwrap();
    let first_step_with_rebuttal = steps
        .iter()
        .position(|s| s.content.contains("A rebuttal of the objection."))
        .expect("the rebuttal appears in some step");
    assert!(first_step_with_objection < first_step_with_rebuttal);
}

#[test]
fn breadth_first_reveals_siblings_before_grandchildren() {
    let input = "[Root]: A claim.\n\
    <+ [A]: First child.\n\
        <+ [AA]: Grandchild of A.\n\
    <+ [B]: Second child.";
    let steps = run_steps(PipeType::MapBreadthFirst, input).unwrap();
    let step_with_b = steps
        .iter()
        .position(|s| s.content.contains("Second child."))
        .expect("B appears in some step");
    let step_with_grandchild = steps
        .iter()
        .position(|s| s.content.contains("Grandchild of A."))
        .expect("AA appears in some step");
    assert!(step_with_b < step_with_grandchild);
}

#[test]
fn depth_first_reveals_a_full_branch_before_starting_the_next() {
    let input = "[Root]: A claim.\n\
    <+ [A]: First child.\n\
        <+ [AA]: Grandchild of A.\n\
    <+ [B]: Second child.";
    let steps = run_steps(PipeType::MapDepthFirst, input).unwrap();
    let step_with_grandchild = steps
        .iter()
        .position(|s| s.content.contains("Grandchild of A."))
        .expect("AA appears in some step");
    let step_with_b = steps
        .iter()
        .position(|s| s.content.contains("Second child."))
        .expect("B appears in some step");
    assert!(step_with_grandchild < step_with_b);
}

#[test]
fn depth_diffusion_shows_every_node_flat_before_attaching_real_structure() {
    let input = "[Root]: A claim.\n\
    <+ [A]: First child.\n\
        <+ [AA]: Grandchild of A.";
    let steps = run_steps(PipeType::MapDepthDiffusion, input).unwrap();
    assert!(steps.len() >= 2);
    // the first step mentions every node but hasn't yet nested AA under A.
    assert!(steps[0].content.contains("Grandchild of A."));
    assert!(!steps[0].content.contains("        <+ [AA]"));
}

#[test]
fn random_diffusion_round_trips_regardless_of_noise_seed() {
    let input = "[Root]: A claim.\n\
    <+ [A]: A reason.\n\
    <- [B]: A counterpoint.";
    for seed in [0u64, 1, 99] {
        let steps = super::run_steps_with(PipeType::MapRandomDiffusion, input, 0.0, Some(seed))
            .unwrap_or_else(|e| panic!("seed {seed} failed: {e:?}"));
        assert_eq!(steps.last().unwrap().content.trim_end(), input);
    }
}

#[test]
fn argument_by_feature_shows_all_premises_before_any_intermediate_conclusion_is_marked() {
    let input = "An argument.\n\n\
(1) A premise.\n\
(2) Another premise.\n\
-- a rule --\n\
(3) An intermediate conclusion.\n\
(4) A further premise.\n\
-----\n\
(5) The final conclusion.";
    let steps = run_steps(PipeType::ArgumentByFeature, input).unwrap();
    let all_premises_step = steps
        .iter()
        .position(|s| s.content.contains("A further premise."))
        .expect("premises appear in some step");
    let inference_step = steps
        .iter()
        .position(|s| s.content.contains("-- a rule --"))
        .expect("inference info appears in some step");
    assert!(all_premises_step < inference_step);
}

#[test]
fn argument_by_feature_title_last_holds_the_title_back_until_the_final_step() {
    let input = "An argument.\n\n\
(1) A premise.\n\
(2) Another premise.\n\
-----\n\
(3) A conclusion.";
    let steps = run_steps(PipeType::ArgumentByFeatureTitleLast, input).unwrap();
    assert!(steps.len() >= 2);
    for step in &steps[..steps.len() - 1] {
        assert!(!step.content.contains("An argument."));
    }
    assert!(steps.last().unwrap().content.contains("An argument."));
    assert_eq!(steps.last().unwrap().content.trim_end(), input);
}
