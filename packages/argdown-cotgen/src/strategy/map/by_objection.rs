use super::common::render_steps;
use crate::error::StrategyError;
use crate::strategy::phrases::map_placeholder;
use crate::strategy::{Step, Strategy};
use crate::tree::{EdgeKind, MapTree, NodeId, Tree};
use crate::view::View;
use std::collections::HashSet;

/// Reveals the map in waves of dialectical depth: the supporting scaffold first, then each round
/// of objections to what's already shown, then objections to those objections, and so on.
/// Undercuts are treated as attack-like for stage inclusion.
pub struct ByObjection;

impl Strategy for ByObjection {
    fn name(&self) -> &'static str {
        "by_objection"
    }

    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError> {
        let map = match tree {
            Tree::Map(m) => m,
            _ => return Err(StrategyError::WrongTreeKind { strategy: self.name() }),
        };

        let mut included: HashSet<NodeId> = map.roots.iter().copied().collect();
        let mut views = Vec::new();
        views.push(make_view(map, &included, true));

        // V2: the supporting scaffold reachable from the roots via support edges only.
        grow_support_closure(map, &mut included);
        views.push(make_view(map, &included, false));

        loop {
            let attackers = attackers_of(map, &included);
            let fresh: Vec<NodeId> = attackers
                .into_iter()
                .filter(|id| !included.contains(id))
                .collect();
            if fresh.is_empty() {
                break;
            }
            for id in fresh {
                included.insert(id);
            }
            grow_support_closure(map, &mut included);
            views.push(make_view(map, &included, false));
        }

        Ok(render_steps(map, self.name(), views))
    }
}

fn make_view(map: &MapTree, included: &HashSet<NodeId>, first_time: bool) -> View {
    let mut view = View::new();
    for &id in included {
        view.insert(id);
        let mut flags = view.flags_for(id);
        flags.suppress_yaml = true;
        flags.suppress_comments = true;
        view.set_flags(id, flags);
    }
    for &id in included {
        let has_unshown_children = map
            .node(id)
            .children()
            .iter()
            .any(|c| !included.contains(c));
        if has_unshown_children {
            view.set_placeholder(id, Some(map_placeholder(first_time).to_string()));
        }
    }
    view
}

/// Expands `included` to its support-edge downward closure: repeatedly add any child reached via
/// a support edge from an already-included node.
fn grow_support_closure(map: &MapTree, included: &mut HashSet<NodeId>) {
    loop {
        let mut added = false;
        let candidates: Vec<NodeId> = included.iter().copied().collect();
        for id in candidates {
            for &child in map.node(id).children() {
                if map.node(child).edge_to_parent == EdgeKind::Support && included.insert(child) {
                    added = true;
                }
            }
        }
        if !added {
            break;
        }
    }
}

/// Every node (anywhere in the tree) whose edge to its parent is attack-like (attack or
/// undercut), and whose parent is already included.
fn attackers_of(map: &MapTree, included: &HashSet<NodeId>) -> Vec<NodeId> {
    let mut out = Vec::new();
    for id in map.node_ids() {
        let node = map.node(id);
        let is_attack_like = matches!(node.edge_to_parent, EdgeKind::Attack | EdgeKind::Undercut);
        if is_attack_like {
            if let Some(parent) = node.parent {
                if included.contains(&parent) {
                    out.push(id);
                }
            }
        }
    }
    out
}
