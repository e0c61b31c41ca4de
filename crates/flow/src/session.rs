//! Contains [EditorSession], one user's in-memory editor state.

use crate::drag_payload::{DragPayload, DropError};
use crate::flow_graph::{Edge, EdgeId, FlowGraph, FlowNode, GraphError, NodeId, Position};
use crate::palette;
use crate::validator::is_valid_connection;

/// The graph being edited plus what is currently selected on the canvas.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    graph: FlowGraph,
    selected_nodes: Vec<NodeId>,
    selected_edges: Vec<EdgeId>,
}

/// Everything removed by [EditorSession::delete_selected].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deleted {
    pub nodes: Vec<FlowNode>,
    /// Selected edges plus edges that touched a deleted node.
    pub edges: Vec<Edge>,
}

impl Deleted {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// Handle a palette component dropped at canvas x coordinate `x`. The node
    /// lands on the node row.
    pub fn drop_component(&mut self, payload_json: &str, x: f32) -> Result<NodeId, DropError> {
        let result = self.try_drop_component(payload_json, x);

        match &result {
            Ok(id) => util::debug_log_info!("Dropped node `{id}` at x = {x}"),
            Err(e) => util::debug_log_warning!("Drop refused: {e}"),
        }

        result
    }

    fn try_drop_component(&mut self, payload_json: &str, x: f32) -> Result<NodeId, DropError> {
        let payload = DragPayload::from_json(payload_json)?;

        if palette::find(&payload.kind).is_none() {
            return Err(DropError::UnknownKind(payload.kind));
        }

        Ok(self.graph.add_node(
            &payload.kind,
            payload.label,
            payload.category,
            Position::on_row(x),
        )?)
    }

    /// Whether releasing a connection drag from `source` over `target` would
    /// create an edge. Only the category rules are consulted.
    pub fn preview_connection(&self, source: &str, target: &str) -> bool {
        is_valid_connection(&self.graph, source, target)
    }

    /// Commit a connection from `source` to `target`.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<EdgeId, GraphError> {
        let result = self.graph.connect(source, target);

        match &result {
            Ok(id) => util::debug_log_info!("Connected edge `{id}`"),
            Err(e) => util::debug_log_warning!("Connection refused: {e}"),
        }

        result
    }

    /// Add node `id` to the selection.
    pub fn select_node(&mut self, id: &str) -> Result<(), GraphError> {
        if self.graph.node(id).is_none() {
            return Err(GraphError::NodeNotFound(id.to_string()));
        }

        if !self.selected_nodes.iter().any(|selected| selected == id) {
            self.selected_nodes.push(id.to_string());
        }
        Ok(())
    }

    /// Add edge `id` to the selection.
    pub fn select_edge(&mut self, id: &str) -> Result<(), GraphError> {
        if self.graph.edge(id).is_none() {
            return Err(GraphError::EdgeNotFound(id.to_string()));
        }

        if !self.selected_edges.iter().any(|selected| selected == id) {
            self.selected_edges.push(id.to_string());
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_nodes.clear();
        self.selected_edges.clear();
    }

    pub fn selected_nodes(&self) -> &[NodeId] {
        &self.selected_nodes
    }

    pub fn selected_edges(&self) -> &[EdgeId] {
        &self.selected_edges
    }

    /// Delete the selected edges and nodes. The start and end nodes are never
    /// deleted and stay selected.
    pub fn delete_selected(&mut self) -> Deleted {
        let mut deleted = Deleted::default();

        for id in std::mem::take(&mut self.selected_edges) {
            if let Some(edge) = self.graph.remove_edge(&id) {
                deleted.edges.push(edge);
            }
        }

        let (kept, doomed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.selected_nodes)
            .into_iter()
            .partition(|id| {
                self.graph
                    .node(id)
                    .is_some_and(|node| node.category.is_fixed())
            });
        self.selected_nodes = kept;

        for id in doomed {
            let touching: Vec<Edge> = self
                .graph
                .edges()
                .iter()
                .filter(|e| e.source == id || e.target == id)
                .cloned()
                .collect();

            // Nodes may have vanished since they were selected.
            if let Ok(node) = self.graph.remove_node(&id) {
                deleted.nodes.push(node);
                deleted.edges.extend(touching);
            }
        }

        if !deleted.is_empty() {
            util::debug_log_info!(
                "Deleted {} node(s) and {} edge(s)",
                deleted.nodes.len(),
                deleted.edges.len()
            );
        }

        deleted
    }

    /// Change the label of node `id`.
    pub fn rename_node(&mut self, id: &str, label: impl Into<String>) -> Result<(), GraphError> {
        self.graph.set_label(id, label)
    }
}
