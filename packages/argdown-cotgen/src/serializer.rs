//! Renders a `(tree, view)` pair back into Argdown text. Consumes the tree and a view; never
//! decides *what* to show or *which* placeholder phrase to use -- that's the strategy's job.

use crate::tree::{ArgumentDoc, CommentPosition, EdgeKind, MapNode, MapTree, NodeKind, Statement, Yaml};
use crate::view::{StatementView, View};
use crate::yaml::render_inline_yaml;

const INDENT_UNIT: &str = "    ";

/// Renders a node/statement's inline YAML: the original `{...}` substring verbatim if one was
/// captured at parse time, otherwise a fresh rendering of the parsed value.
fn render_yaml(yaml: &Yaml, yaml_raw: &Option<String>) -> String {
    match yaml_raw {
        Some(raw) => raw.clone(),
        None => render_inline_yaml(yaml),
    }
}

/// Renders an argument map under the given view.
pub fn serialize_map(tree: &MapTree, view: &View) -> String {
    let mut out = String::new();
    for (i, &root) in tree.roots.iter().enumerate() {
        if view.contains(root) {
            render_node(tree, view, root, 0, &mut out);
        }
        for stray in tree.stray.iter().filter(|s| s.after_root_index == i) {
            if stray.text.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&stray.text);
                out.push('\n');
            }
        }
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn render_node(tree: &MapTree, view: &View, id: crate::tree::NodeId, depth: usize, out: &mut String) {
    let node = tree.node(id);
    let flags = view.flags_for(id);
    let indent = INDENT_UNIT.repeat(depth);

    if !flags.suppress_comments {
        for c in node
            .comments
            .iter()
            .filter(|c| c.position == CommentPosition::Above)
        {
            out.push_str(&indent);
            out.push_str("// ");
            out.push_str(&c.text);
            out.push('\n');
        }
    }

    out.push_str(&indent);
    let edge = view.edge_for(id, node.edge_to_parent);
    if edge != EdgeKind::None {
        out.push_str(edge.token());
        out.push(' ');
    }
    out.push_str(&node_head(node));
    if !flags.suppress_yaml && !node.yaml.is_empty() {
        out.push(' ');
        out.push_str(&render_yaml(&node.yaml, &node.yaml_raw));
    }
    if !flags.suppress_comments {
        if let Some(c) = node
            .comments
            .iter()
            .find(|c| c.position == CommentPosition::Inline)
        {
            out.push_str(" // ");
            out.push_str(&c.text);
        }
    }
    out.push('\n');

    for &child in node.children() {
        if view.contains(child) {
            render_node(tree, view, child, depth + 1, out);
        }
    }

    if let Some(placeholder) = &flags.placeholder {
        out.push_str(&INDENT_UNIT.repeat(depth + 1));
        out.push_str("// ");
        out.push_str(placeholder);
        out.push('\n');
    }
}

pub(crate) fn node_head(node: &MapNode) -> String {
    let (open, close) = match node.kind {
        NodeKind::Claim => ('[', ']'),
        NodeKind::Argument => ('<', '>'),
    };
    let label = node.label.clone().unwrap_or_default();
    let head = format!("{open}{label}{close}");
    if node.text.is_empty() {
        head
    } else {
        format!("{head}: {}", node.text)
    }
}

/// Renders a premise-conclusion argument under the given view.
pub fn serialize_argument(doc: &ArgumentDoc, view: &StatementView) -> String {
    let mut out = String::new();

    if let Some(gist) = &doc.title_gist {
        if !view.suppress_title {
            out.push_str(gist);
            out.push('\n');
            if !doc.statements.is_empty() || view.placeholder_comment.is_some() {
                out.push('\n');
            }
        }
    }

    let visible: Vec<&Statement> = doc
        .statements
        .iter()
        .filter(|s| view.contains(s.number()))
        .collect();

    let mut next_number = 1usize;

    if let Some(comment) = &view.placeholder_comment {
        out.push_str("// ");
        out.push_str(comment);
        out.push('\n');
    }

    for statement in &visible {
        let is_conclusion = matches!(
            statement,
            Statement::IntermediateConclusion { .. } | Statement::FinalConclusion { .. }
        );
        if is_conclusion {
            out.push_str(&separator_line(statement, view));
            out.push('\n');
        }
        if !view.suppress_comments {
            for c in statement
                .prop()
                .comments
                .iter()
                .filter(|c| c.position == CommentPosition::Above)
            {
                out.push_str("// ");
                out.push_str(&c.text);
                out.push('\n');
            }
        }
        out.push_str(&render_statement(statement, next_number, view));
        out.push('\n');
        next_number += 1;
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn separator_line(statement: &Statement, view: &StatementView) -> String {
    let inference = statement.inference();
    if view.show_inference_info {
        if let Some(inf) = inference {
            if let Some(rule) = &inf.rule_text {
                return format!("-- {rule} --");
            }
        }
    }
    "-----".to_string()
}

fn render_statement(statement: &Statement, number: usize, view: &StatementView) -> String {
    let prop = statement.prop();
    let mut line = format!("({number}) {}", prop.text);
    if !view.suppress_yaml && !prop.yaml.is_empty() {
        line.push(' ');
        line.push_str(&render_yaml(&prop.yaml, &prop.yaml_raw));
    }
    if !view.suppress_comments {
        if let Some(c) = prop
            .comments
            .iter()
            .find(|c| c.position == CommentPosition::Inline)
        {
            line.push_str(" // ");
            line.push_str(&c.text);
        }
    }
    line
}
