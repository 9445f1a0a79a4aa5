use thiserror::Error;

/// Errors that can occur while parsing an Argdown document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not classify input as an argument map or an argument (no root claim, edge token, premise line, or inference separator found)")]
    UnknownInputKind,

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: failed to parse inline yaml: {source}")]
    YamlParseFailed {
        line: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("line {line}: found an edge token ('<+', '<-' or '<_') with no preceding node to attach it to")]
    StrayEdge { line: usize },

    #[error("line {line}: unclosed inline yaml block")]
    UnclosedYaml { line: usize },
}

/// Errors that can occur while validating a [`crate::config::Config`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown pipe type: {value}")]
    UnknownPipeType { value: String },

    #[error("p_abort must lie in [0, 1], found {value}")]
    PAbortOutOfRange { value: f64 },

    #[error("pipe type '{pipe_type}' expects a {expected} but the input parsed as a {found}")]
    InputKindMismatch {
        pipe_type: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Internal assertion failures raised by a strategy implementation. These indicate a bug in the
/// strategy itself, never a problem with caller-supplied input.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("strategy '{strategy}' produced a final step that does not reconstruct the input")]
    RoundTripMismatch { strategy: &'static str },

    #[error("strategy '{strategy}' produced an empty step list")]
    EmptySteps { strategy: &'static str },

    #[error("strategy '{strategy}' was invoked with the wrong tree shape (dispatcher should have rejected this earlier)")]
    WrongTreeKind { strategy: &'static str },
}

/// The single error type returned by [`crate::dispatcher::CotGenerator::call`].
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}
