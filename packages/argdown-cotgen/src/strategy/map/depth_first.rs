use super::common::render_steps;
use crate::error::StrategyError;
use crate::strategy::phrases::map_placeholder;
use crate::strategy::{Step, Strategy};
use crate::tree::{MapTree, NodeId, Tree};
use crate::view::View;

/// Reveals one node at a time in preorder depth-first order, ties broken by source order.
pub struct DepthFirst;

impl Strategy for DepthFirst {
    fn name(&self) -> &'static str {
        "depth_first"
    }

    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError> {
        let map = match tree {
            Tree::Map(m) => m,
            _ => return Err(StrategyError::WrongTreeKind { strategy: self.name() }),
        };

        let order = dfs_order(map);
        let mut views = Vec::with_capacity(order.len());
        let mut shown: Vec<NodeId> = Vec::new();

        for &id in &order {
            shown.push(id);
            let mut view = View::new();
            for &n in &shown {
                view.insert(n);
                let mut flags = view.flags_for(n);
                flags.suppress_yaml = true;
                flags.suppress_comments = true;
                view.set_flags(n, flags);
            }
            for &n in &shown {
                let has_unshown_children = map
                    .node(n)
                    .children()
                    .iter()
                    .any(|c| !view.contains(*c));
                if has_unshown_children {
                    view.set_placeholder(n, Some(map_placeholder(false).to_string()));
                }
            }
            views.push(view);
        }

        Ok(render_steps(map, self.name(), views))
    }
}

fn dfs_order(map: &MapTree) -> Vec<NodeId> {
    let mut order = Vec::new();
    for &root in &map.roots {
        visit(map, root, &mut order);
    }
    order
}

fn visit(map: &MapTree, id: NodeId, order: &mut Vec<NodeId>) {
    order.push(id);
    for &child in map.node(id).children() {
        visit(map, child, order);
    }
}
