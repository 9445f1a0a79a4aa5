use super::common::final_view;
use crate::error::StrategyError;
use crate::serializer::{node_head, serialize_map};
use crate::strategy::phrases::{map_explanation, map_final_explanation};
use crate::strategy::{dedup_consecutive_stages, number_steps, Step, Strategy};
use crate::tree::{MapTree, NodeId, Tree};

/// Begins from a flat list of every proposition with no edges shown, then increases the allowed
/// attachment depth by one per view: a node at or under the allowed depth is attached to its true
/// parent with its true edge token; anything deeper is still rendered flat, prefixed with a `??`
/// token marking that its real attachment is still pending.
pub struct DepthDiffusion;

impl Strategy for DepthDiffusion {
    fn name(&self) -> &'static str {
        "depth_diffusion"
    }

    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError> {
        let map = match tree {
            Tree::Map(m) => m,
            _ => return Err(StrategyError::WrongTreeKind { strategy: self.name() }),
        };

        let max_rank = map.max_rank();
        let mut stages = Vec::with_capacity(max_rank + 2);
        for (i, allowed) in (0..=max_rank).enumerate() {
            stages.push((
                render_at_depth(map, allowed),
                map_explanation(self.name(), i),
            ));
        }
        stages.push((
            serialize_map(map, &final_view(map)),
            map_final_explanation().to_string(),
        ));
        dedup_consecutive_stages(&mut stages);

        Ok(number_steps(stages))
    }
}

/// Renders every node in source order: nodes whose rank is within `allowed_depth` are printed
/// nested at their true indent with their true edge token; deeper nodes are printed flat (indent
/// 0) prefixed with `??` in place of an edge token.
fn render_at_depth(map: &MapTree, allowed_depth: usize) -> String {
    let mut out = String::new();
    for &root in &map.roots {
        render_subtree(map, root, 0, allowed_depth, &mut out);
    }
    for id in map.node_ids() {
        if map.rank(id) > allowed_depth {
            out.push_str("?? ");
            out.push_str(&node_head(map.node(id)));
            out.push('\n');
        }
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn render_subtree(map: &MapTree, id: NodeId, depth: usize, allowed_depth: usize, out: &mut String) {
    if depth > allowed_depth {
        return;
    }
    let node = map.node(id);
    let indent = "    ".repeat(depth);
    out.push_str(&indent);
    if node.edge_to_parent != crate::tree::EdgeKind::None {
        out.push_str(node.edge_to_parent.token());
        out.push(' ');
    }
    out.push_str(&node_head(node));
    out.push('\n');

    for &child in node.children() {
        if map.rank(child) <= allowed_depth {
            render_subtree(map, child, depth + 1, allowed_depth, out);
        }
    }
}
