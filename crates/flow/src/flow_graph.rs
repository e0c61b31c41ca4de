//! Flow graph types and helpers.
//!
//! Provides [FlowNode], [Edge], and [FlowGraph] for building and mutating the
//! graph shown on the editor canvas. Every edge in a [FlowGraph] passed
//! [check_category_pair] when it was created.
use thiserror::Error;

use crate::category::NodeCategory;
use crate::validator::{CategoryLookup, ConnectionRule, check_category_pair};

/// Unique identifier for a node in the graph.
pub type NodeId = String;

/// Unique identifier for an edge in the graph.
pub type EdgeId = String;

/// Id of the start node every graph is created with.
pub const START_ID: &str = "start";

/// Id of the end node every graph is created with.
pub const END_ID: &str = "end";

/// Nodes are laid out on a single row at this height.
pub const ROW_Y: f32 = 250.0;

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A position on the node row.
    pub const fn on_row(x: f32) -> Self {
        Self::new(x, ROW_Y)
    }
}

/// A node on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: NodeId,

    /// Never changes after the node is created.
    pub category: NodeCategory,

    /// Text shown on the node. Editable.
    pub label: String,

    /// The palette component this node was dropped from, e.g. `SAP` or
    /// `lookup`. [None] for the start and end nodes.
    pub kind: Option<String>,

    pub position: Position,
}

/// Directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,

    /// Source node ID
    pub source: NodeId,

    /// Target node ID
    pub target: NodeId,

    /// Whether the edge is drawn animated
    pub animated: bool,
}

/// In-memory graph owned by one editing session.
///
/// Nodes and edges are kept in insertion order, which is also draw order.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<Edge>,
}

impl Default for FlowGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowGraph {
    /// A graph holding only the start and end nodes.
    pub fn new() -> Self {
        Self {
            nodes: vec![
                FlowNode {
                    id: START_ID.to_string(),
                    category: NodeCategory::Start,
                    label: "Start".to_string(),
                    kind: None,
                    position: Position::on_row(100.0),
                },
                FlowNode {
                    id: END_ID.to_string(),
                    category: NodeCategory::End,
                    label: "End".to_string(),
                    kind: None,
                    position: Position::on_row(900.0),
                },
            ],
            edges: Vec::new(),
        }
    }

    /// Add a node dropped from the palette and return its [NodeId].
    ///
    /// The id is `{kind}-{n}` where `n` starts at the node count plus one and
    /// is bumped until the id is unused. Start and end nodes can't be added.
    pub fn add_node(
        &mut self,
        kind: &str,
        label: impl Into<String>,
        category: NodeCategory,
        position: Position,
    ) -> Result<NodeId, GraphError> {
        if category.is_fixed() {
            return Err(GraphError::FixedCategory(category));
        }

        let mut n = self.nodes.len() + 1;
        let id = loop {
            let candidate = format!("{kind}-{n}");
            if self.node(&candidate).is_none() {
                break candidate;
            }
            n += 1;
        };

        self.nodes.push(FlowNode {
            id: id.clone(),
            category,
            label: label.into(),
            kind: Some(kind.to_string()),
            position,
        });

        Ok(id)
    }

    /// Remove a node and any edges to/from it. The start and end nodes can't
    /// be removed.
    pub fn remove_node(&mut self, id: &str) -> Result<FlowNode, GraphError> {
        let idx = self
            .nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;

        if self.nodes[idx].category.is_fixed() {
            return Err(GraphError::FixedNode(id.to_string()));
        }

        self.edges
            .retain(|edge| edge.source != id && edge.target != id);

        Ok(self.nodes.remove(idx))
    }

    /// Connect node `source` to node `target` with an animated [Edge].
    ///
    /// Fails if either node is missing, if the category pair is not allowed,
    /// or if the same edge already exists.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<EdgeId, GraphError> {
        let from = self
            .category_of(source)
            .ok_or_else(|| GraphError::NodeNotFound(source.to_string()))?;
        let to = self
            .category_of(target)
            .ok_or_else(|| GraphError::NodeNotFound(target.to_string()))?;

        check_category_pair(from, to).map_err(|rule| GraphError::InvalidConnection {
            from: source.to_string(),
            to: target.to_string(),
            rule,
        })?;

        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return Err(GraphError::DuplicateEdge {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let id = format!("{source}->{target}");
        self.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
        });

        Ok(id)
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        self.edges
            .iter()
            .position(|e| e.id == id)
            .map(|idx| self.edges.remove(idx))
    }

    /// Change the label of a node. The category and kind stay as they are.
    pub fn set_label(&mut self, id: &str, label: impl Into<String>) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;

        node.label = label.into();
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Find all edges where `id` is the source.
    pub fn outgoing_edges(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.source == id).collect()
    }

    /// Find all edges where `id` is the target.
    pub fn incoming_edges(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.target == id).collect()
    }
}

impl CategoryLookup for FlowGraph {
    fn category_of(&self, id: &str) -> Option<NodeCategory> {
        self.node(id).map(|node| node.category)
    }
}

/// Errors that can occur when working with the flow graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node `{0}` not found")]
    NodeNotFound(NodeId),

    #[error("Edge `{0}` not found")]
    EdgeNotFound(EdgeId),

    #[error("The `{0}` node can't be removed")]
    FixedNode(NodeId),

    #[error("Only one {0} node can exist")]
    FixedCategory(NodeCategory),

    #[error("Cannot connect `{from}` to `{to}`: {rule}")]
    InvalidConnection {
        from: NodeId,
        to: NodeId,
        rule: ConnectionRule,
    },

    #[error("`{from}` is already connected to `{to}`")]
    DuplicateEdge { from: NodeId, to: NodeId },
}
