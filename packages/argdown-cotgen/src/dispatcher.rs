//! The single entry point: parses, picks a strategy by `pipe_type`, runs it, and formats the
//! result. Everything upstream (lexer, parser, tree, strategies, serializer, formatter) is a
//! private collaborator reached only through here.

use crate::config::Config;
use crate::cot::format_trace;
use crate::error::GenerationError;
use crate::parser;
use crate::strategy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a chain-of-thought reconstruction trace for one Argdown document under one
/// [`Config`]. Stateless and reusable across calls; holds nothing but its (validated) config.
pub struct CotGenerator {
    config: Config,
}
impl CotGenerator {
    /// Validates `config` and builds a generator. Fails eagerly on an out-of-range `p_abort` or
    /// `p_noise` so a misconfiguration never surfaces deep inside a strategy run.
    pub fn new(config: Config) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the full pipeline on `text`: lex, parse, dispatch to the configured strategy, run it
    /// (with abortion injection if configured), and format the resulting steps into one trace.
    pub fn call(&self, text: &str) -> Result<String, GenerationError> {
        let span = tracing::info_span!("cotgen", pipe_type = self.config.pipe_type.as_str());
        let _enter = span.enter();

        let tree = parser::parse(text)?;
        tracing::debug!(lines = text.lines().count(), "lexed and parsed input");

        self.config.pipe_type.check_tree_kind(&tree)?;

        let strategy = self
            .config
            .pipe_type
            .strategy(self.config.seed.unwrap_or(0), self.config.p_noise);

        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let steps = strategy::run(
            strategy.as_ref(),
            &tree,
            text,
            self.config.p_abort,
            Some(&mut rng),
            &self.config.abortion_pool,
        )?;
        tracing::debug!(steps = steps.len(), "generated reconstruction steps");

        let trace = format_trace(&steps);
        tracing::debug!(chars = trace.len(), "formatted chain-of-thought trace");
        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipeType;

    #[test]
    fn rejects_unknown_pipe_type_at_construction_time() {
        let err = "not_a_real_pipe".parse::<PipeType>().unwrap_err();
        assert!(matches!(
            err,
            crate::error::ConfigError::UnknownPipeType { .. }
        ));
    }

    #[test]
    fn single_root_claim_yields_one_step() {
        let config = Config::new(PipeType::MapByRank);
        let gen = CotGenerator::new(config).unwrap();
        let trace = gen.call("[Root]: Only claim.").unwrap();
        assert!(trace.contains("[Root]: Only claim."));
        assert!(trace.contains("version='v1'"));
    }

    #[test]
    fn mismatched_pipe_type_is_rejected() {
        let config = Config::new(PipeType::ArgumentByRank);
        let gen = CotGenerator::new(config).unwrap();
        let err = gen.call("[Root]: Only claim.").unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Config(crate::error::ConfigError::InputKindMismatch { .. })
        ));
    }

    #[test]
    fn determinism_under_fixed_seed() {
        let config = Config {
            p_abort: 1.0,
            seed: Some(42),
            ..Config::new(PipeType::MapByRank)
        };
        let gen = CotGenerator::new(config).unwrap();
        let input = "[Root]: A claim.\n    <+ [Reason]: A reason.";
        let a = gen.call(input).unwrap();
        let b = gen.call(input).unwrap();
        assert_eq!(a, b);
    }
}
