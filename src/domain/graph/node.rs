//! Decision graph node model.
//!
//! Nodes are decoded as-is from the graph document. The `type` field is kept
//! as the raw string so that illegal values reach the validator instead of
//! failing the decode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of legal node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Asks the user something and routes on the classified answer.
    Question,
    /// Reacts to a previous answer and keeps routing.
    Response,
    /// Sink that ends the traversal.
    Terminus,
}

impl NodeType {
    /// Parses the wire representation, returning `None` for unknown values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "question" => Some(Self::Question),
            "response" => Some(Self::Response),
            "terminus" => Some(Self::Terminus),
            _ => None,
        }
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Response => "response",
            Self::Terminus => "terminus",
        }
    }

    /// Returns all node types.
    pub fn all() -> &'static [NodeType] {
        &[NodeType::Question, NodeType::Response, NodeType::Terminus]
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single vertex of the decision graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    /// Raw node type; see [`DecisionNode::kind`].
    #[serde(rename = "type")]
    pub node_type: String,

    /// Text presented when the node is visited. May be empty.
    pub content: String,

    /// Display-only guidance for whoever evaluates the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    /// Classification label to child node id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, String>>,

    /// Label within `children` used when the classification has no edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl DecisionNode {
    /// Creates a question node with no edges yet.
    pub fn question(content: impl Into<String>) -> Self {
        Self::with_type(NodeType::Question, content)
    }

    /// Creates a response node with no edges yet.
    pub fn response(content: impl Into<String>) -> Self {
        Self::with_type(NodeType::Response, content)
    }

    /// Creates a terminus node.
    pub fn terminus(content: impl Into<String>) -> Self {
        Self::with_type(NodeType::Terminus, content)
    }

    fn with_type(node_type: NodeType, content: impl Into<String>) -> Self {
        Self {
            node_type: node_type.as_str().to_string(),
            content: content.into(),
            test: None,
            children: None,
            default: None,
        }
    }

    /// Adds an edge from `label` to `target`.
    pub fn with_child(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.children
            .get_or_insert_with(BTreeMap::new)
            .insert(label.into(), target.into());
        self
    }

    /// Sets the default edge label.
    pub fn with_default(mut self, label: impl Into<String>) -> Self {
        self.default = Some(label.into());
        self
    }

    /// Sets the evaluation guide.
    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = Some(test.into());
        self
    }

    /// Returns the parsed node type, or `None` when the raw value is illegal.
    pub fn kind(&self) -> Option<NodeType> {
        NodeType::parse(&self.node_type)
    }

    /// Returns true if this node ends the traversal.
    pub fn is_terminus(&self) -> bool {
        self.kind() == Some(NodeType::Terminus)
    }

    /// Returns the child id for an exact label match.
    pub fn child(&self, label: &str) -> Option<&str> {
        self.children
            .as_ref()
            .and_then(|children| children.get(label))
            .map(String::as_str)
    }

    /// Returns the child id behind the default edge.
    pub fn default_child(&self) -> Option<&str> {
        self.default.as_deref().and_then(|label| self.child(label))
    }
}

/// Mapping from node id to node.
///
/// Ordered by id so every walk over the graph is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionGraph {
    nodes: BTreeMap<String, DecisionNode>,
}

impl DecisionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, builder style.
    pub fn with_node(mut self, id: impl Into<String>, node: DecisionNode) -> Self {
        self.insert(id, node);
        self
    }

    /// Inserts or replaces a node, returning the previous one.
    pub fn insert(&mut self, id: impl Into<String>, node: DecisionNode) -> Option<DecisionNode> {
        self.nodes.insert(id.into(), node)
    }

    /// Removes a node.
    pub fn remove(&mut self, id: &str) -> Option<DecisionNode> {
        self.nodes.remove(id)
    }

    /// Looks up a node by id.
    pub fn get(&self, id: &str) -> Option<&DecisionNode> {
        self.nodes.get(id)
    }

    /// Mutable lookup, mostly useful for building broken graphs in tests.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut DecisionNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Node ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecisionNode)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<(String, DecisionNode)> for DecisionGraph {
    fn from_iter<I: IntoIterator<Item = (String, DecisionNode)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
