//! Read-only selections over a parsed tree. A strategy never mutates the tree between steps; it
//! instead produces a sequence of [`View`]s, each naming which nodes are visible and how each
//! visible node should be rendered.

use crate::tree::{EdgeKind, NodeId};
use std::collections::{HashMap, HashSet};

/// Per-node rendering flags for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFlags {
    pub suppress_yaml: bool,
    pub suppress_comments: bool,
    /// The exact placeholder comment text to render beneath this node, if the strategy judged
    /// one due for children not yet shown in this view. Chosen by the strategy from the phrasing
    /// table in `phrases`; the serializer renders it verbatim and makes no phrasing decisions of
    /// its own.
    pub placeholder: Option<String>,
}

/// A single reconstruction stage: which nodes are visible, and with which flags.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub included: HashSet<NodeId>,
    pub flags: HashMap<NodeId, NodeFlags>,
    /// Per-node edge polarity overrides for this view only, used solely by `random_diffusion` to
    /// render a not-yet-corrected edge without ever mutating the tree itself.
    pub edge_overrides: HashMap<NodeId, EdgeKind>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.included.contains(&id)
    }

    pub fn insert(&mut self, id: NodeId) {
        self.included.insert(id);
    }

    pub fn flags_for(&self, id: NodeId) -> NodeFlags {
        self.flags.get(&id).cloned().unwrap_or_default()
    }

    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.flags.insert(id, flags);
    }

    pub fn set_placeholder(&mut self, id: NodeId, placeholder: Option<String>) {
        let mut flags = self.flags_for(id);
        flags.placeholder = placeholder;
        self.set_flags(id, flags);
    }

    pub fn edge_for(&self, id: NodeId, actual: EdgeKind) -> EdgeKind {
        self.edge_overrides.get(&id).copied().unwrap_or(actual)
    }

    /// Removes the suppression flags on every node already in the view, used to build the final,
    /// fully-populated view from an existing one.
    pub fn reveal_all(&mut self) {
        for id in self.included.clone() {
            let mut flags = self.flags_for(id);
            flags.suppress_yaml = false;
            flags.suppress_comments = false;
            flags.placeholder = None;
            self.set_flags(id, flags);
        }
    }
}

/// A set of visible statement numbers for an `ArgumentDoc` view, analogous to [`View`] but keyed
/// by statement number rather than [`NodeId`] since argument statements have no stable id table.
#[derive(Debug, Clone, Default)]
pub struct StatementView {
    pub included: HashSet<usize>,
    pub suppress_yaml: bool,
    pub suppress_comments: bool,
    pub show_inference_info: bool,
    /// Hides the argument's `title_gist` preamble for this step. Used only by the title-last
    /// variant of `by_feature`, which shows every other feature before finally adding the title.
    pub suppress_title: bool,
    /// A placeholder comment to render in the still-empty premise region (e.g. "Premises will be
    /// added later"), chosen by the strategy from the phrasing table in `phrases`.
    pub placeholder_comment: Option<String>,
}

impl StatementView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, number: usize) -> bool {
        self.included.contains(&number)
    }
}
