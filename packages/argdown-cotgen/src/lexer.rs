//! Line classification: the first pass over raw Argdown text, turning each physical line into a
//! typed [`LineRecord`] by inspecting its leading token. Purely textual — this module builds no
//! tree and makes no decisions about parent/child relationships; it only recognises what kind of
//! line it's looking at and hands back a small struct describing it.

use crate::tree::{EdgeKind, NodeKind};

/// What a single line was classified as.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// `[Label]: text.` or `<Label>: text.` at indent 0.
    RootClaim {
        node_kind: NodeKind,
        label: Option<String>,
        text: String,
    },
    /// `[Label]` with no colon, no text: a reference to a claim declared elsewhere.
    ClaimRef { label: String },
    /// `<Label>` with no colon, no text: a reference to an argument declared elsewhere.
    ArgumentRef { label: String },
    /// An edge line: `<+ `, `<- ` or `<_ ` followed by a node head (claim or argument,
    /// declaration or reference).
    Edge {
        polarity: EdgeKind,
        node_kind: NodeKind,
        label: Option<String>,
        /// `Some` if this declares the node's text (colon form), `None` for a bare reference.
        text: Option<String>,
    },
    /// `(n) text.`
    Premise { number: usize, text: String },
    /// `-- rule text --`, or a bare run of 5+ dashes with no inner text.
    InferenceSeparator { info: Option<String> },
    /// `// ...` or a (possibly multi-line, already joined) `/* ... */`.
    Comment { text: String },
    /// Whitespace-only.
    Blank,
    /// Anything else: free text, most importantly the `title_gist` preamble of an argument, or a
    /// proposition's continuation text.
    Text(String),
}

/// A single classified line, with its original text and indentation preserved so the serializer
/// can reproduce spacing exactly.
#[derive(Debug, Clone)]
pub struct LineRecord {
    pub raw_text: String,
    pub leading_indent: usize,
    pub kind: LineKind,
}

/// Classifies a whole document, after first collapsing any multi-line `/* ... */` block comments
/// into single logical lines.
pub fn classify(raw_contents: &str) -> Vec<LineRecord> {
    join_block_comments(raw_contents)
        .iter()
        .map(|l| classify_line(l))
        .collect()
}

/// Joins physical lines so that a `/* ... */` block spanning several source lines becomes one
/// logical line for [`classify_line`] to look at. Lines that close on their own are untouched.
fn join_block_comments(raw_contents: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut lines = raw_contents.lines().peekable();
    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("/*") && !trimmed[2..].contains("*/") {
            let mut joined = line.to_string();
            for cont in lines.by_ref() {
                joined.push('\n');
                joined.push_str(cont);
                if cont.contains("*/") {
                    break;
                }
            }
            out.push(joined);
        } else {
            out.push(line.to_string());
        }
    }
    out
}

/// Classifies a single (possibly block-comment-joined) line.
pub fn classify_line(raw: &str) -> LineRecord {
    let leading_indent = raw.len() - raw.trim_start_matches(' ').len();
    let trimmed = raw.trim();

    let kind = if trimmed.is_empty() {
        LineKind::Blank
    } else if let Some(text) = trimmed.strip_prefix("//") {
        LineKind::Comment {
            text: text.trim_start().to_string(),
        }
    } else if trimmed.starts_with("/*") {
        let inner = trimmed
            .strip_prefix("/*")
            .unwrap()
            .trim_end()
            .strip_suffix("*/")
            .unwrap_or(trimmed.strip_prefix("/*").unwrap())
            .trim();
        LineKind::Comment {
            text: inner.to_string(),
        }
    } else if let Some((polarity, rest)) = strip_edge_token(trimmed) {
        if let Some((node_kind, label, text)) = parse_node_head(rest) {
            LineKind::Edge {
                polarity,
                node_kind,
                label,
                text,
            }
        } else {
            LineKind::Text(trimmed.to_string())
        }
    } else if is_bare_dash_separator(trimmed) {
        LineKind::InferenceSeparator { info: None }
    } else if let Some(info) = strip_inference_separator(trimmed) {
        LineKind::InferenceSeparator {
            info: if info.is_empty() { None } else { Some(info) },
        }
    } else if let Some((number, text)) = parse_premise(trimmed) {
        LineKind::Premise { number, text }
    } else if leading_indent == 0 {
        if let Some((node_kind, label, text)) = parse_node_head(trimmed) {
            match (node_kind, text) {
                (node_kind, Some(text)) => LineKind::RootClaim {
                    node_kind,
                    label,
                    text,
                },
                (NodeKind::Claim, None) => LineKind::ClaimRef {
                    label: label.unwrap_or_default(),
                },
                (NodeKind::Argument, None) => LineKind::ArgumentRef {
                    label: label.unwrap_or_default(),
                },
            }
        } else {
            LineKind::Text(trimmed.to_string())
        }
    } else if let Some((node_kind, label, text)) = parse_node_head(trimmed) {
        match node_kind {
            NodeKind::Claim if text.is_none() => LineKind::ClaimRef {
                label: label.unwrap_or_default(),
            },
            NodeKind::Argument if text.is_none() => LineKind::ArgumentRef {
                label: label.unwrap_or_default(),
            },
            _ => LineKind::Text(trimmed.to_string()),
        }
    } else {
        LineKind::Text(trimmed.to_string())
    };

    LineRecord {
        raw_text: raw.to_string(),
        leading_indent,
        kind,
    }
}

fn strip_edge_token(trimmed: &str) -> Option<(EdgeKind, &str)> {
    if let Some(rest) = trimmed.strip_prefix("<+ ") {
        Some((EdgeKind::Support, rest))
    } else if let Some(rest) = trimmed.strip_prefix("<- ") {
        Some((EdgeKind::Attack, rest))
    } else if let Some(rest) = trimmed.strip_prefix("<_ ") {
        Some((EdgeKind::Undercut, rest))
    } else {
        None
    }
}

/// Parses a claim (`[Label]` / `[Label]: text`) or argument (`<Label>` / `<Label>: text`) head at
/// the start of `s`. Returns the node kind, the label (if one was given), and the text (if the
/// colon form was used).
fn parse_node_head(s: &str) -> Option<(NodeKind, Option<String>, Option<String>)> {
    let (open, close, kind) = if s.starts_with('[') {
        ('[', ']', NodeKind::Claim)
    } else if s.starts_with('<') {
        ('<', '>', NodeKind::Argument)
    } else {
        return None;
    };
    let rest = &s[1..];
    let close_pos = rest.find(close)?;
    let label = &rest[..close_pos];
    let after = &rest[close_pos + 1..];

    let label = if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    };

    if let Some(text) = after.strip_prefix(':') {
        Some((kind, label, Some(text.trim_start().to_string())))
    } else if after.trim().is_empty() {
        Some((kind, label, None))
    } else {
        // Something else follows that isn't a colon declaration: not a valid head (e.g. stray
        // trailing punctuation); treat the whole thing as plain text by bailing out.
        let _ = open;
        None
    }
}

fn is_bare_dash_separator(trimmed: &str) -> bool {
    trimmed.len() >= 5 && trimmed.chars().all(|c| c == '-')
}

/// Recognises `-- rule text --` (at least two dashes on each side), returning the inner text.
fn strip_inference_separator(trimmed: &str) -> Option<String> {
    if !trimmed.starts_with("--") || !trimmed.ends_with("--") || trimmed.len() < 4 {
        return None;
    }
    let inner = &trimmed[2..trimmed.len() - 2];
    // Don't mistake a bare run of dashes (already handled above) or a line that merely starts
    // and ends with two dashes but isn't shaped like a separator (e.g. contains other structure
    // we'd rather leave as text) -- in Argdown, any `--...--` at top level is a separator.
    Some(inner.trim().to_string())
}

fn parse_premise(trimmed: &str) -> Option<(usize, String)> {
    let rest = trimmed.strip_prefix('(')?;
    let close = rest.find(')')?;
    let number: usize = rest[..close].parse().ok()?;
    let text = rest[close + 1..].trim_start().to_string();
    Some((number, text))
}

/// Splits a proposition's trailing text into its core text, an optional inline YAML block
/// (`{k: v, ...}`), and an optional trailing `//` comment, in that source order. Used by both
/// parser branches when assembling a [`crate::tree::Proposition`] or [`crate::tree::MapNode`].
pub fn split_proposition_text(s: &str) -> (String, Option<String>, Option<String>) {
    let (before_comment, comment) = split_trailing_line_comment(s);
    let (core, yaml) = split_trailing_yaml(before_comment);
    (
        core.trim_end().to_string(),
        yaml,
        comment.map(|c| c.trim().to_string()),
    )
}

/// Finds a `//` that occurs outside of any `{...}` span, treating it as the start of a trailing
/// line comment.
fn split_trailing_line_comment(s: &str) -> (&str, Option<&str>) {
    let mut depth = 0i32;
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    for i in 0..chars.len() {
        let (byte_idx, c) = chars[i];
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            '/' if depth <= 0 && chars.get(i + 1).map(|(_, c)| *c) == Some('/') => {
                return (&s[..byte_idx], Some(&s[byte_idx + 2..]));
            }
            _ => {}
        }
    }
    (s, None)
}

/// If `s` ends (modulo trailing whitespace) with a balanced `{...}` block, splits it off.
fn split_trailing_yaml(s: &str) -> (&str, Option<String>) {
    let trimmed = s.trim_end();
    if !trimmed.ends_with('}') {
        return (s, None);
    }
    let mut depth = 0i32;
    let mut start = None;
    for (byte_idx, c) in trimmed.char_indices().rev() {
        match c {
            '}' => depth += 1,
            '{' => {
                depth -= 1;
                if depth == 0 {
                    start = Some(byte_idx);
                    break;
                }
            }
            _ => {}
        }
    }
    match start {
        Some(start) => (&trimmed[..start], Some(trimmed[start..].to_string())),
        None => (s, None),
    }
}
