//! The typed tree model produced by the parser and consumed by strategies.
//!
//! Nodes never own their parent: a [`MapTree`] holds a flat table of [`MapNode`]s, and each node
//! refers to its parent (if any) by [`NodeId`], a plain index into that table. This avoids the
//! `Rc`/`Weak` cycle that an owning-pointer tree would require, and keeps strategies, which only
//! ever read the tree, free of any borrow-checker gymnastics.

use indexmap::IndexMap;

/// A stable identifier for a [`MapNode`], assigned in parse order. Indexes into
/// [`MapTree::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Whether a node in an argument map is a claim (`[Label]: text`) or an argument reference
/// (`<Label>: text`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Claim,
    Argument,
}

/// The polarity of the edge connecting a node to its parent. The root of each tree in a
/// [`MapTree`] has no edge (it is not anyone's child).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    None,
    Support,
    Attack,
    Undercut,
}
impl EdgeKind {
    /// The source token that introduces an edge of this kind (`<+ `, `<- `, `<_ `).
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Support => "<+",
            Self::Attack => "<-",
            Self::Undercut => "<_",
        }
    }
}

/// Where a [`Comment`] is attached relative to the proposition line it decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPosition {
    Above,
    Inline,
    Below,
}

/// A single `//` or `/* */` comment, with its position relative to the node or statement it is
/// attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub position: CommentPosition,
}

/// An ordered YAML mapping, as attached inline to a proposition (`{k: v, ...}`). Key order is
/// preserved literally so that re-serializing reproduces the original text.
pub type Yaml = IndexMap<String, serde_yaml::Value>;

/// A single node of an argument map: a claim or an argument reference, possibly with children
/// reached via support/attack/undercut edges.
#[derive(Debug, Clone)]
pub struct MapNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// The bracketed/angle-bracketed label, if the node declared one (`[Label]`/`<Label>`).
    pub label: Option<String>,
    pub text: String,
    pub yaml: Yaml,
    /// The exact `{...}` substring this node's `yaml` was parsed from, if any. Kept verbatim
    /// (rather than re-derived from `yaml` at render time) so a quoted string, unusual spacing,
    /// or any other source detail `serde_yaml::Value` doesn't retain survives byte-exact.
    pub yaml_raw: Option<String>,
    pub comments: Vec<Comment>,
    pub edge_to_parent: EdgeKind,
    pub parent: Option<NodeId>,
    /// Source indentation in spaces, used only during parsing to determine tree shape; not
    /// necessarily meaningful once the tree is built (rank is recomputed from parent links).
    pub(crate) indent: usize,
    children: Vec<NodeId>,
}
impl MapNode {
    pub(crate) fn new(
        kind: NodeKind,
        label: Option<String>,
        text: String,
        yaml: Yaml,
        yaml_raw: Option<String>,
        comments: Vec<Comment>,
        edge_to_parent: EdgeKind,
        indent: usize,
    ) -> Self {
        Self {
            id: NodeId(0),
            kind,
            label,
            text,
            yaml,
            yaml_raw,
            comments,
            edge_to_parent,
            parent: None,
            indent,
            children: Vec::new(),
        }
    }
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }
}

/// A decoration (stray comment or blank-line run) that appeared at the top level of a document,
/// not attached to any particular node. Recorded by source position so the final reconstruction
/// step can put it back exactly where it was.
#[derive(Debug, Clone)]
pub struct StrayItem {
    pub after_root_index: usize,
    pub text: String,
}

/// A parsed argument map: an ordered forest of [`MapNode`] trees plus any top-level decorations.
#[derive(Debug, Clone, Default)]
pub struct MapTree {
    nodes: Vec<MapNode>,
    pub roots: Vec<NodeId>,
    pub stray: Vec<StrayItem>,
}
impl MapTree {
    pub(crate) fn push_node(&mut self, node: MapNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
    pub fn node(&self, id: NodeId) -> &MapNode {
        &self.nodes[id.0]
    }
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut MapNode {
        &mut self.nodes[id.0]
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children_mut().push(child);
        self.node_mut(child).parent = Some(parent);
    }
    /// The rank (distance from its tree's root) of the given node.
    pub fn rank(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut curr = id;
        while let Some(parent) = self.node(curr).parent {
            depth += 1;
            curr = parent;
        }
        depth
    }
    /// The maximum rank present anywhere in the tree.
    pub fn max_rank(&self) -> usize {
        (0..self.nodes.len())
            .map(|i| self.rank(NodeId(i)))
            .max()
            .unwrap_or(0)
    }
    /// All node ids, in the order they were created during parsing (stable source order).
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}

/// A single premise or conclusion line of an [`ArgumentDoc`].
#[derive(Debug, Clone)]
pub struct Proposition {
    pub label: Option<String>,
    pub text: String,
    pub yaml: Yaml,
    /// The exact `{...}` substring this statement's `yaml` was parsed from, if any. See
    /// [`MapNode::yaml_raw`].
    pub yaml_raw: Option<String>,
    pub comments: Vec<Comment>,
}

/// Structured inference data (`{uses: [1, 2], with: "modus ponens", from: [3]}`), attached to an
/// [`Inference`] when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceYaml {
    pub uses: Vec<i64>,
    pub with: Option<String>,
    pub from: Vec<i64>,
}

/// An inference separator (`-- rule_text --` or a bare run of dashes), together with any
/// structured data it carries.
#[derive(Debug, Clone, Default)]
pub struct Inference {
    pub rule_text: Option<String>,
    pub structured: Option<InferenceYaml>,
}

/// A single statement in an [`ArgumentDoc`], numbered as it will appear in the final rendering.
#[derive(Debug, Clone)]
pub enum Statement {
    Premise {
        number: usize,
        prop: Proposition,
    },
    IntermediateConclusion {
        number: usize,
        prop: Proposition,
        inference: Inference,
    },
    FinalConclusion {
        number: usize,
        prop: Proposition,
        inference: Inference,
    },
}
impl Statement {
    pub fn number(&self) -> usize {
        match self {
            Self::Premise { number, .. }
            | Self::IntermediateConclusion { number, .. }
            | Self::FinalConclusion { number, .. } => *number,
        }
    }
    pub fn prop(&self) -> &Proposition {
        match self {
            Self::Premise { prop, .. }
            | Self::IntermediateConclusion { prop, .. }
            | Self::FinalConclusion { prop, .. } => prop,
        }
    }
    pub fn inference(&self) -> Option<&Inference> {
        match self {
            Self::Premise { .. } => None,
            Self::IntermediateConclusion { inference, .. }
            | Self::FinalConclusion { inference, .. } => Some(inference),
        }
    }
    pub fn is_final(&self) -> bool {
        matches!(self, Self::FinalConclusion { .. })
    }
}

/// A parsed premise-conclusion argument.
#[derive(Debug, Clone, Default)]
pub struct ArgumentDoc {
    pub title_gist: Option<String>,
    pub statements: Vec<Statement>,
}

/// The two shapes a parsed document can take, dispatched on by the strategy framework.
#[derive(Debug, Clone)]
pub enum Tree {
    Map(MapTree),
    Argument(ArgumentDoc),
}
