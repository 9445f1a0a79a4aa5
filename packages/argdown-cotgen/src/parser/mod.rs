//! Mode detection and dispatch: the single entry point that turns classified lines into a
//! [`Tree`], picking the map or argument branch by structural signature.

mod argument;
mod map;

use crate::error::ParseError;
use crate::lexer::{classify, LineKind};
use crate::tree::Tree;

/// Parses a full Argdown document. Classifies lines, decides whether the document is an argument
/// map or a premise-conclusion argument, then hands off to the matching branch.
pub fn parse(raw_contents: &str) -> Result<Tree, ParseError> {
    let lines = classify(raw_contents);

    let first_structural = lines
        .iter()
        .find(|l| !matches!(l.kind, LineKind::Blank | LineKind::Comment { .. }));

    let is_map = match first_structural {
        Some(l) => matches!(
            l.kind,
            LineKind::RootClaim { .. } | LineKind::ClaimRef { .. } | LineKind::ArgumentRef { .. }
        ),
        None => false,
    } || lines.iter().any(|l| matches!(l.kind, LineKind::Edge { .. }));

    let is_argument = lines.iter().any(|l| {
        matches!(
            l.kind,
            LineKind::Premise { .. } | LineKind::InferenceSeparator { .. }
        )
    });

    if is_map {
        Ok(Tree::Map(map::parse_map(&lines)?))
    } else if is_argument {
        Ok(Tree::Argument(argument::parse_argument(&lines)?))
    } else {
        Err(ParseError::UnknownInputKind)
    }
}
