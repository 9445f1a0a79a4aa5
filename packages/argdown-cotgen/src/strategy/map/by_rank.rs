use super::common::render_steps;
use crate::error::StrategyError;
use crate::strategy::phrases::map_placeholder;
use crate::strategy::{Step, Strategy};
use crate::tree::Tree;
use crate::view::View;

/// Reveals the map one rank at a time: roots first, then every node at rank ≤ r, until the whole
/// tree is shown.
pub struct ByRank;

impl Strategy for ByRank {
    fn name(&self) -> &'static str {
        "by_rank"
    }

    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError> {
        let map = match tree {
            Tree::Map(m) => m,
            _ => return Err(StrategyError::WrongTreeKind { strategy: self.name() }),
        };

        let max_rank = map.max_rank();
        let mut views = Vec::new();

        let mut v1 = View::new();
        for id in map.node_ids().filter(|id| map.rank(*id) == 0) {
            v1.insert(id);
            let mut flags = v1.flags_for(id);
            flags.suppress_yaml = true;
            flags.suppress_comments = true;
            v1.set_flags(id, flags);
        }
        mark_placeholders(map, &mut v1, 0, true);
        views.push(v1);

        for r in 1..=max_rank {
            let mut view = View::new();
            for id in map.node_ids().filter(|id| map.rank(*id) <= r) {
                view.insert(id);
                let mut flags = view.flags_for(id);
                flags.suppress_yaml = true;
                flags.suppress_comments = true;
                view.set_flags(id, flags);
            }
            mark_placeholders(map, &mut view, r, false);
            views.push(view);
        }

        Ok(render_steps(map, self.name(), views))
    }
}

/// Marks every node at the view's outer rank that has children not yet shown with a placeholder
/// comment, so the next step's growth is foreshadowed.
fn mark_placeholders(
    map: &crate::tree::MapTree,
    view: &mut View,
    outer_rank: usize,
    first_time: bool,
) {
    for id in map.node_ids().filter(|id| map.rank(*id) == outer_rank && view.contains(*id)) {
        let has_unshown_children = map
            .node(id)
            .children()
            .iter()
            .any(|c| !view.contains(*c));
        if has_unshown_children {
            view.set_placeholder(id, Some(map_placeholder(first_time).to_string()));
        }
    }
}
