//! The configuration record accepted by [`crate::dispatcher::CotGenerator`], and the closed
//! `PipeType` enum that selects a parser branch and strategy.

use crate::error::ConfigError;
use crate::strategy::phrases::PhrasePool;
use crate::strategy::{argument, map, Strategy};
use crate::tree::Tree;

/// Which parser branch and reconstruction strategy a [`crate::dispatcher::CotGenerator`] should
/// use. Closed rather than a free string since the full set of supported strategies is known at
/// compile time: an unrecognised value is a [`ConfigError::UnknownPipeType`] raised eagerly in
/// [`crate::dispatcher::CotGenerator::new`], never a runtime string-miss deep inside dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeType {
    MapByRank,
    MapBreadthFirst,
    MapDepthFirst,
    MapByObjection,
    MapRandomDiffusion,
    MapDepthDiffusion,
    ArgumentByFeature,
    ArgumentByFeatureTitleLast,
    ArgumentByRank,
}
impl PipeType {
    /// The canonical string form, as accepted by [`std::str::FromStr`] and printed in error
    /// messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MapByRank => "map_by_rank",
            Self::MapBreadthFirst => "map_breadth_first",
            Self::MapDepthFirst => "map_depth_first",
            Self::MapByObjection => "map_by_objection",
            Self::MapRandomDiffusion => "map_random_diffusion",
            Self::MapDepthDiffusion => "map_depth_diffusion",
            Self::ArgumentByFeature => "argument_by_feature",
            Self::ArgumentByFeatureTitleLast => "argument_by_feature_title_last",
            Self::ArgumentByRank => "argument_by_rank",
        }
    }
    /// Whether this pipe type expects the input to parse as an [`crate::tree::MapTree`] (`true`)
    /// or an [`crate::tree::ArgumentDoc`] (`false`).
    fn expects_map(self) -> bool {
        matches!(
            self,
            Self::MapByRank
                | Self::MapBreadthFirst
                | Self::MapDepthFirst
                | Self::MapByObjection
                | Self::MapRandomDiffusion
                | Self::MapDepthDiffusion
        )
    }
    /// Checks that the parsed tree has the shape this pipe type expects, raising
    /// [`ConfigError::InputKindMismatch`] (S6) if not.
    pub(crate) fn check_tree_kind(self, tree: &Tree) -> Result<(), ConfigError> {
        let found = match tree {
            Tree::Map(_) => "map",
            Tree::Argument(_) => "argument",
        };
        let ok = matches!(
            (self.expects_map(), tree),
            (true, Tree::Map(_)) | (false, Tree::Argument(_))
        );
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InputKindMismatch {
                pipe_type: self.as_str(),
                expected: if self.expects_map() { "map" } else { "argument" },
                found,
            })
        }
    }
    /// Builds the strategy instance for this pipe type. `seed` and `p_noise` are only consulted
    /// by `map_random_diffusion`, the one strategy whose own view construction is itself
    /// randomised (independently of the abortion hook).
    pub(crate) fn strategy(self, seed: u64, p_noise: f64) -> Box<dyn Strategy> {
        match self {
            Self::MapByRank => Box::new(map::ByRank),
            Self::MapBreadthFirst => Box::new(map::BreadthFirst),
            Self::MapDepthFirst => Box::new(map::DepthFirst),
            Self::MapByObjection => Box::new(map::ByObjection),
            Self::MapRandomDiffusion => Box::new(map::RandomDiffusion { seed, p_noise }),
            Self::MapDepthDiffusion => Box::new(map::DepthDiffusion),
            Self::ArgumentByFeature => Box::new(argument::ByFeature { defer_title: false }),
            Self::ArgumentByFeatureTitleLast => {
                Box::new(argument::ByFeature { defer_title: true })
            }
            Self::ArgumentByRank => Box::new(argument::ByRank),
        }
    }
}
impl std::str::FromStr for PipeType {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "map_by_rank" => Ok(Self::MapByRank),
            "map_breadth_first" => Ok(Self::MapBreadthFirst),
            "map_depth_first" => Ok(Self::MapDepthFirst),
            "map_by_objection" => Ok(Self::MapByObjection),
            "map_random_diffusion" => Ok(Self::MapRandomDiffusion),
            "map_depth_diffusion" => Ok(Self::MapDepthDiffusion),
            "argument_by_feature" => Ok(Self::ArgumentByFeature),
            "argument_by_feature_title_last" => Ok(Self::ArgumentByFeatureTitleLast),
            "argument_by_rank" => Ok(Self::ArgumentByRank),
            other => Err(ConfigError::UnknownPipeType {
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for one [`crate::dispatcher::CotGenerator`] invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub pipe_type: PipeType,
    /// Probability in `[0, 1]` that the abortion hook perturbs a non-first step.
    pub p_abort: f64,
    /// Seeds the pseudorandom generator threaded through abortion injection (and, for
    /// `map_random_diffusion`, initial noise injection). `None` draws a fresh seed from the
    /// system entropy source at call time, so determinism under a fixed seed (§8 property 4) is
    /// only promised when one is actually supplied.
    pub seed: Option<u64>,
    /// Wording used by the abortion hook. Swappable so embedders can localise or restyle the
    /// trace without touching the strategy framework.
    pub abortion_pool: PhrasePool,
    /// Fraction of a map's edges that `map_random_diffusion` starts out with an incorrect
    /// polarity; ignored by every other pipe type. Not part of the universal `Config` record in
    /// the external-interfaces documentation (only `map_random_diffusion` is randomised this
    /// way), but folded into the one `Config` type rather than a second constructor so
    /// `CotGenerator::new` has a single entry point regardless of pipe type; see `DESIGN.md`.
    pub p_noise: f64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            pipe_type: PipeType::MapByRank,
            p_abort: 0.0,
            seed: None,
            abortion_pool: PhrasePool::default(),
            p_noise: 0.2,
        }
    }
}
impl Config {
    pub fn new(pipe_type: PipeType) -> Self {
        Self {
            pipe_type,
            ..Self::default()
        }
    }
    /// Checks the value ranges that [`PipeType::from_str`] can't: `p_abort` and `p_noise` must
    /// both lie in `[0, 1]`.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.p_abort) {
            return Err(ConfigError::PAbortOutOfRange {
                value: self.p_abort,
            });
        }
        if !(0.0..=1.0).contains(&self.p_noise) {
            return Err(ConfigError::PAbortOutOfRange { value: self.p_noise });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_type_round_trips_through_str() {
        for pt in [
            PipeType::MapByRank,
            PipeType::MapBreadthFirst,
            PipeType::MapDepthFirst,
            PipeType::MapByObjection,
            PipeType::MapRandomDiffusion,
            PipeType::MapDepthDiffusion,
            PipeType::ArgumentByFeature,
            PipeType::ArgumentByFeatureTitleLast,
            PipeType::ArgumentByRank,
        ] {
            let parsed: PipeType = pt.as_str().parse().unwrap();
            assert_eq!(parsed, pt);
        }
    }

    #[test]
    fn unknown_pipe_type_is_an_error() {
        let err = "not_a_real_pipe".parse::<PipeType>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPipeType { .. }));
    }

    #[test]
    fn out_of_range_p_abort_is_rejected() {
        let config = Config {
            p_abort: 1.5,
            ..Config::new(PipeType::MapByRank)
        };
        assert!(config.validate().is_err());
    }
}
