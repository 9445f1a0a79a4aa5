//! Tree assembly for the premise-conclusion argument branch: a left-to-right scan over
//! classified lines (a manual index loop rather than an iterator-combinator parser), building a
//! flat statement list instead of a nested tree.

use crate::error::ParseError;
use crate::lexer::{split_proposition_text, LineKind, LineRecord};
use crate::tree::{
    ArgumentDoc, Comment, CommentPosition, Inference, Proposition, Statement,
};
use crate::yaml::{as_inference_yaml, parse_inline_yaml};

pub fn parse_argument(lines: &[LineRecord]) -> Result<ArgumentDoc, ParseError> {
    let mut doc = ArgumentDoc::default();
    let mut pending_inference: Option<Inference> = None;
    let mut just_saw_separator = false;
    let mut pending_comments: Vec<Comment> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;
        match &line.kind {
            LineKind::Blank => {}
            LineKind::Comment { text } => pending_comments.push(Comment {
                text: text.clone(),
                position: CommentPosition::Above,
            }),
            LineKind::Text(text) => {
                if doc.title_gist.is_none() && doc.statements.is_empty() {
                    doc.title_gist = Some(text.clone());
                }
                // Free text elsewhere (continuation lines) carries no structure we model.
            }
            LineKind::InferenceSeparator { info } => {
                pending_inference = Some(Inference {
                    rule_text: info.clone(),
                    structured: None,
                });
                just_saw_separator = true;
            }
            LineKind::Premise { number, text } => {
                let (core, yaml_text, inline_comment) = split_proposition_text(text);
                let yaml = match &yaml_text {
                    Some(y) => parse_inline_yaml(y, line_no)?,
                    None => Default::default(),
                };
                let mut comments = std::mem::take(&mut pending_comments);
                if let Some(c) = inline_comment {
                    comments.push(Comment {
                        text: c,
                        position: CommentPosition::Inline,
                    });
                }
                let prop = Proposition {
                    label: None,
                    text: core,
                    yaml,
                    yaml_raw: yaml_text,
                    comments,
                };

                let statement = if just_saw_separator {
                    let mut inference = pending_inference.take().unwrap_or_default();
                    if let Some(structured) = as_inference_yaml(&prop.yaml) {
                        inference.structured = Some(structured);
                    }
                    // Provisionally a conclusion; the final pass below decides intermediate vs.
                    // final once the whole document has been scanned.
                    Statement::FinalConclusion {
                        number: *number,
                        prop,
                        inference,
                    }
                } else {
                    Statement::Premise {
                        number: *number,
                        prop,
                    }
                };
                doc.statements.push(statement);
                just_saw_separator = false;
            }
            LineKind::RootClaim { .. }
            | LineKind::ClaimRef { .. }
            | LineKind::ArgumentRef { .. }
            | LineKind::Edge { .. } => {
                return Err(ParseError::Malformed {
                    line: line_no,
                    reason: "found an argument-map line inside a premise-conclusion argument"
                        .to_string(),
                });
            }
        }
    }

    if doc.statements.is_empty() {
        return Err(ParseError::UnknownInputKind);
    }

    retag_intermediate_conclusions(&mut doc);
    Ok(doc)
}

/// Every statement provisionally tagged `FinalConclusion` during the scan (i.e. every statement
/// immediately following an inference separator) is the true final conclusion only if it is the
/// last statement in the document; all other post-separator statements become
/// `IntermediateConclusion`s. This is the last-after-separator heuristic of §4.B: it applies
/// uniformly whether or not any inference carries explicit `from:` YAML, since a statement named
/// in a later `from:` list is -- by construction -- not the document's last statement either.
fn retag_intermediate_conclusions(doc: &mut ArgumentDoc) {
    let last_index = doc.statements.len() - 1;
    for (idx, statement) in doc.statements.iter_mut().enumerate() {
        if idx == last_index {
            continue;
        }
        if let Statement::FinalConclusion {
            number,
            prop,
            inference,
        } = statement
        {
            *statement = Statement::IntermediateConclusion {
                number: *number,
                prop: prop.clone(),
                inference: inference.clone(),
            };
        }
    }
}
