//! Tree assembly for the argument-map branch: a stack-based indentation parse, walking a
//! `curr_parent`/`curr_node` pair and re-anchoring to the right ancestor on dedent.
//!
//! Kept as an explicit ancestor stack rather than re-descending from the root on every dedent:
//! map indentation isn't bounded the way heading levels in many outline formats are, so
//! re-walking from the root for every line would be quadratic in pathological deeply-nested
//! maps.

use crate::error::ParseError;
use crate::lexer::{split_proposition_text, LineKind, LineRecord};
use crate::tree::{Comment, CommentPosition, MapNode, MapTree, NodeId, StrayItem};
use crate::yaml::parse_inline_yaml;

/// Decorations (blank lines, stray comments) accumulated since the last structural line, waiting
/// to find out whether they precede a node (and so become `Above` comments on it) or sit between
/// root trees (and so become document-level [`StrayItem`]s).
#[derive(Default)]
struct Pending {
    comments: Vec<String>,
    saw_blank: bool,
}

pub fn parse_map(lines: &[LineRecord]) -> Result<MapTree, ParseError> {
    let mut tree = MapTree::default();
    let mut stack: Vec<(usize, NodeId)> = Vec::new();
    let mut pending = Pending::default();

    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;
        match &line.kind {
            LineKind::Blank => pending.saw_blank = true,
            LineKind::Comment { text } => pending.comments.push(text.clone()),
            LineKind::RootClaim {
                node_kind,
                label,
                text,
            } => {
                let (core, yaml_text, inline_comment) = split_proposition_text(text);
                let yaml = match &yaml_text {
                    Some(y) => parse_inline_yaml(y, line_no)?,
                    None => Default::default(),
                };
                let mut comments = take_leading_comments(&mut pending, &mut tree, &stack, line_no);
                if let Some(c) = inline_comment {
                    comments.push(Comment {
                        text: c,
                        position: CommentPosition::Inline,
                    });
                }
                let node = MapNode::new(
                    *node_kind,
                    label.clone(),
                    core,
                    yaml,
                    yaml_text,
                    comments,
                    crate::tree::EdgeKind::None,
                    0,
                );
                stack.clear();
                let id = push_and_link(&mut tree, &mut stack, 0, node);
                tree.roots.push(id);
            }
            LineKind::ClaimRef { label } | LineKind::ArgumentRef { label } => {
                let node_kind = if matches!(line.kind, LineKind::ClaimRef { .. }) {
                    crate::tree::NodeKind::Claim
                } else {
                    crate::tree::NodeKind::Argument
                };
                if line.leading_indent == 0 {
                    let comments =
                        take_leading_comments(&mut pending, &mut tree, &stack, line_no);
                    let node = MapNode::new(
                        node_kind,
                        Some(label.clone()),
                        String::new(),
                        Default::default(),
                        None,
                        comments,
                        crate::tree::EdgeKind::None,
                        0,
                    );
                    stack.clear();
                    let id = push_and_link(&mut tree, &mut stack, 0, node);
                    tree.roots.push(id);
                } else {
                    return Err(ParseError::Malformed {
                        line: line_no,
                        reason: "a bare node reference must either be a root or follow an edge token"
                            .to_string(),
                    });
                }
            }
            LineKind::Edge {
                polarity,
                node_kind,
                label,
                text,
            } => {
                if stack.is_empty() && line.leading_indent == 0 {
                    return Err(ParseError::StrayEdge { line: line_no });
                }
                let (core, yaml, yaml_raw, mut comments) = match text {
                    Some(text) => {
                        let (core, yaml_text, inline_comment) = split_proposition_text(text);
                        let yaml = match &yaml_text {
                            Some(y) => parse_inline_yaml(y, line_no)?,
                            None => Default::default(),
                        };
                        let comments = inline_comment
                            .into_iter()
                            .map(|c| Comment {
                                text: c,
                                position: CommentPosition::Inline,
                            })
                            .collect::<Vec<_>>();
                        (core, yaml, yaml_text, comments)
                    }
                    None => (String::new(), Default::default(), None, Vec::new()),
                };
                let mut leading = take_leading_comments(&mut pending, &mut tree, &stack, line_no);
                leading.append(&mut comments);

                let node = MapNode::new(
                    *node_kind,
                    label.clone(),
                    core,
                    yaml,
                    yaml_raw,
                    leading,
                    *polarity,
                    line.leading_indent,
                );

                while let Some(&(indent, _)) = stack.last() {
                    if indent >= line.leading_indent {
                        stack.pop();
                    } else {
                        break;
                    }
                }
                if stack.is_empty() {
                    return Err(ParseError::StrayEdge { line: line_no });
                }
                push_and_link(&mut tree, &mut stack, line.leading_indent, node);
            }
            LineKind::Premise { .. } | LineKind::InferenceSeparator { .. } => {
                return Err(ParseError::Malformed {
                    line: line_no,
                    reason: "found an argument-style line inside an argument map".to_string(),
                });
            }
            LineKind::Text(_) => {
                // Free text under a map node isn't part of the data model (§3): treat it as
                // structurally insignificant trivia and ignore it, matching the principle that
                // the parser reproduces structural order, not arbitrary prose.
            }
        }
    }

    // Anything left pending at EOF trails the last root (or, if there were no structural lines
    // at all, this function wouldn't have been called: mode detection requires at least one).
    flush_trailing(&mut pending, &mut tree);

    Ok(tree)
}

fn push_and_link(
    tree: &mut MapTree,
    stack: &mut Vec<(usize, NodeId)>,
    indent: usize,
    node: MapNode,
) -> NodeId {
    let id = tree.push_node(node);
    tree.node_mut(id).id = id;
    if let Some(&(_, parent)) = stack.last() {
        tree.add_child(parent, id);
    }
    stack.push((indent, id));
    id
}

/// Resolves pending decorations once we know they're followed by a node: comments become
/// `Above` comments on that node; a pending blank run inside a subtree is normalized away rather
/// than preserved, since blank lines between sibling nodes carry no structure worth reproducing.
fn take_leading_comments(
    pending: &mut Pending,
    tree: &mut MapTree,
    stack: &[(usize, NodeId)],
    _line_no: usize,
) -> Vec<Comment> {
    let had_blank = std::mem::take(&mut pending.saw_blank);
    let comments = std::mem::take(&mut pending.comments);

    // A blank line directly before a brand new root (stack empty, i.e. we're between trees)
    // is a real document-level decoration worth keeping; a blank line inside a subtree is
    // normalized away.
    if had_blank && stack.is_empty() && !tree.roots.is_empty() {
        tree.stray.push(StrayItem {
            after_root_index: tree.roots.len() - 1,
            text: String::new(),
        });
    }

    comments
        .into_iter()
        .map(|text| Comment {
            text,
            position: CommentPosition::Above,
        })
        .collect()
}

fn flush_trailing(pending: &mut Pending, tree: &mut MapTree) {
    if tree.roots.is_empty() {
        return;
    }
    let after = tree.roots.len() - 1;
    if pending.saw_blank {
        tree.stray.push(StrayItem {
            after_root_index: after,
            text: String::new(),
        });
    }
    for text in pending.comments.drain(..) {
        tree.stray.push(StrayItem {
            after_root_index: after,
            text: format!("// {text}"),
        });
    }
}
