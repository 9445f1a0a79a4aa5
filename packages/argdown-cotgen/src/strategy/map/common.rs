//! Shared utilities for the map strategies: rendering a sequence of views into steps, and
//! building the final, fully-populated view every strategy ends on.

use crate::serializer::serialize_map;
use crate::strategy::phrases::{map_explanation, map_final_explanation};
use crate::strategy::{dedup_consecutive_stages, Step};
use crate::tree::MapTree;
use crate::view::View;

/// Builds the view that includes every node with nothing suppressed: the mandatory last step.
pub fn final_view(tree: &MapTree) -> View {
    let mut view = View::new();
    for id in tree.node_ids() {
        view.insert(id);
    }
    view.reveal_all();
    view
}

/// A view with every node included but YAML and comments suppressed (used as the common starting
/// point for strategies that show full structure before attaching inline data).
pub fn structural_view(tree: &MapTree) -> View {
    let mut view = View::new();
    for id in tree.node_ids() {
        view.insert(id);
        let mut flags = view.flags_for(id);
        flags.suppress_yaml = true;
        flags.suppress_comments = true;
        view.set_flags(id, flags);
    }
    view
}

/// Renders an ordered list of intermediate views (with their own explanations) plus the mandatory
/// final view into a numbered `Vec<Step>`.
pub fn render_steps(
    tree: &MapTree,
    strategy_name: &'static str,
    intermediate: Vec<View>,
) -> Vec<Step> {
    let mut stages = Vec::with_capacity(intermediate.len() + 1);
    for (i, view) in intermediate.iter().enumerate() {
        stages.push((
            serialize_map(tree, view),
            map_explanation(strategy_name, i),
        ));
    }
    stages.push((
        serialize_map(tree, &final_view(tree)),
        map_final_explanation().to_string(),
    ));
    dedup_consecutive_stages(&mut stages);
    crate::strategy::number_steps(stages)
}
