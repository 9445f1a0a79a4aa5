use super::common::render_steps;
use crate::error::StrategyError;
use crate::strategy::{Step, Strategy};
use crate::tree::{EdgeKind, MapTree, NodeId, Tree};
use crate::view::View;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Begins from a tree whose edge polarities have each independently been flipped to a wrong value
/// with probability `p_noise`, then corrects one error per view until the true tree is reached.
/// Uses its own RNG stream, seeded independently of the abortion hook's, so toggling diffusion
/// noise never perturbs the abortion sequence or vice versa.
pub struct RandomDiffusion {
    pub seed: u64,
    pub p_noise: f64,
}

impl Strategy for RandomDiffusion {
    fn name(&self) -> &'static str {
        "random_diffusion"
    }

    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError> {
        let map = match tree {
            Tree::Map(m) => m,
            _ => return Err(StrategyError::WrongTreeKind { strategy: self.name() }),
        };

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(1));
        let p_noise = self.p_noise.clamp(0.0, 1.0);

        let mut wrong: HashMap<NodeId, EdgeKind> = HashMap::new();
        for id in map.node_ids() {
            let actual = map.node(id).edge_to_parent;
            if actual != EdgeKind::None && rng.gen_bool(p_noise) {
                wrong.insert(id, flip_to_different(actual, &mut rng));
            }
        }

        let mut views = Vec::new();
        let mut current = wrong.clone();
        views.push(structural_view_with_overrides(map, &current));

        let mut pending: Vec<NodeId> = wrong.keys().copied().collect();
        pending.sort_by_key(|id| id.0);
        for id in pending {
            current.remove(&id);
            views.push(structural_view_with_overrides(map, &current));
        }

        Ok(render_steps(map, self.name(), views))
    }
}

fn structural_view_with_overrides(map: &MapTree, overrides: &HashMap<NodeId, EdgeKind>) -> View {
    let mut view = View::new();
    for id in map.node_ids() {
        view.insert(id);
        let mut flags = view.flags_for(id);
        flags.suppress_yaml = true;
        flags.suppress_comments = true;
        view.set_flags(id, flags);
    }
    view.edge_overrides = overrides.clone();
    view
}

fn flip_to_different(actual: EdgeKind, rng: &mut ChaCha8Rng) -> EdgeKind {
    let choices: Vec<EdgeKind> = [EdgeKind::Support, EdgeKind::Attack, EdgeKind::Undercut]
        .into_iter()
        .filter(|o| *o != actual)
        .collect();
    choices[rng.gen_range(0..choices.len())]
}
