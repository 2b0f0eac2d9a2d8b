//! The graph store — single source of truth for the canvas.
//!
//! Owns the canonical node and edge collections and exposes every
//! mutation the editor can perform. All mutations run synchronously on
//! the interaction thread; the one invariant the store enforces at all
//! times is that no edge ever references a missing node. Mutations on
//! absent ids are no-ops (UI events can race user-issued deletes), so
//! none of the single-element operations return errors.

use crate::id::{EdgeId, NodeId};
use crate::model::{Edge, GraphError, Node, NodeKind, Position};
use std::collections::{HashMap, HashSet};

/// Emitted after each completed mutation so the rendering surface can
/// re-render. Listeners receive the event only — they read graph state
/// through their own shared reference to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    NodeAdded(NodeId),
    NodeMoved(NodeId),
    NodeRelabeled(NodeId),
    NodeRemoved(NodeId),
    EdgeAdded(EdgeId),
    EdgeRemoved(EdgeId),
    /// The whole graph was swapped (generation ingest or import).
    Replaced,
    Cleared,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Canonical, mutable holder of all nodes and edges.
///
/// Nodes are kept in insertion order (z-stacking for the rendering
/// surface); order is otherwise without semantics. An id → index map
/// gives O(1) node lookup and is rebuilt after removals.
#[derive(Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    listeners: Vec<Listener>,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the fixed illustrative seed graph.
    pub fn with_seed() -> Self {
        let mut store = Self::new();
        let (nodes, edges) = crate::seed::seed_graph();
        // The seed is statically well-formed.
        store
            .replace_all(nodes, edges)
            .expect("seed graph is valid");
        store
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    // ─── Observation ─────────────────────────────────────────────────────

    /// Register a change listener. Every completed mutation is announced;
    /// the listener must not attempt to mutate the store re-entrantly.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: StoreEvent) {
        log::debug!("store event: {event:?}");
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Create a node with a freshly generated unique id and return it.
    pub fn add_node(&mut self, kind: NodeKind, position: Position, label: String) -> NodeId {
        let mut id = NodeId::with_prefix(kind.as_str());
        // Fresh ids are counter-based, but a generated graph may have
        // installed an id with the same spelling.
        while self.node_index.contains_key(&id) {
            id = NodeId::with_prefix(kind.as_str());
        }
        self.node_index.insert(id, self.nodes.len());
        self.nodes.push(Node::new(id, kind, position, label));
        self.notify(StoreEvent::NodeAdded(id));
        id
    }

    /// Remove a node and every edge referencing it. No-op if absent.
    /// Callers never observe an intermediate state with dangling edges.
    pub fn delete_node(&mut self, id: NodeId) {
        let Some(&idx) = self.node_index.get(&id) else {
            return;
        };
        let mut removed_edges = Vec::new();
        self.edges.retain(|e| {
            if e.touches(id) {
                removed_edges.push(e.id);
                false
            } else {
                true
            }
        });
        self.nodes.remove(idx);
        self.rebuild_index();
        for edge_id in removed_edges {
            self.notify(StoreEvent::EdgeRemoved(edge_id));
        }
        self.notify(StoreEvent::NodeRemoved(id));
    }

    /// Replace a node's label. No-op if absent.
    pub fn update_node_label(&mut self, id: NodeId, label: String) {
        let Some(&idx) = self.node_index.get(&id) else {
            return;
        };
        self.nodes[idx].label = label;
        self.notify(StoreEvent::NodeRelabeled(id));
    }

    /// Replace a node's position. No-op if absent.
    pub fn move_node(&mut self, id: NodeId, position: Position) {
        let Some(&idx) = self.node_index.get(&id) else {
            return;
        };
        self.nodes[idx].position = position;
        self.notify(StoreEvent::NodeMoved(id));
    }

    /// Connect two existing nodes. Returns `None` — and mutates nothing —
    /// if either endpoint is absent. Self-loops and duplicate pairs are
    /// permitted; no validation rule excludes them.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        if !self.contains_node(source) || !self.contains_node(target) {
            log::debug!("add_edge rejected: missing endpoint {source} -> {target}");
            return None;
        }
        let id = EdgeId::fresh();
        self.edges.push(Edge::new(id, source, target));
        self.notify(StoreEvent::EdgeAdded(id));
        Some(id)
    }

    /// Remove an edge. No-op if absent.
    pub fn delete_edge(&mut self, id: EdgeId) {
        let Some(idx) = self.edges.iter().position(|e| e.id == id) else {
            return;
        };
        self.edges.remove(idx);
        self.notify(StoreEvent::EdgeRemoved(id));
    }

    /// Atomically discard the current graph and install the candidate.
    /// The candidate is validated first; on any error the store is left
    /// exactly as it was — a candidate is never partially applied.
    pub fn replace_all(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> Result<(), GraphError> {
        validate_graph(&nodes, &edges)?;
        self.nodes = nodes;
        self.edges = edges;
        self.rebuild_index();
        self.notify(StoreEvent::Replaced);
        Ok(())
    }

    /// Empty the graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_index.clear();
        self.notify(StoreEvent::Cleared);
    }

    /// Rebuild the id → index map (needed after removals and bulk swaps).
    fn rebuild_index(&mut self) {
        self.node_index.clear();
        for (i, node) in self.nodes.iter().enumerate() {
            self.node_index.insert(node.id, i);
        }
    }
}

/// Validate a candidate graph: unique node ids, unique edge ids, and no
/// edge referencing a node outside the candidate's own node set.
pub fn validate_graph(nodes: &[Node], edges: &[Edge]) -> Result<(), GraphError> {
    let mut node_ids = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !node_ids.insert(node.id) {
            return Err(GraphError::DuplicateNodeId(node.id.as_str().to_string()));
        }
    }
    let mut edge_ids = HashSet::with_capacity(edges.len());
    for edge in edges {
        if !edge_ids.insert(edge.id) {
            return Err(GraphError::DuplicateEdgeId(edge.id.as_str().to_string()));
        }
        for endpoint in [edge.source, edge.target] {
            if !node_ids.contains(&endpoint) {
                return Err(GraphError::DanglingEdge {
                    edge: edge.id.as_str().to_string(),
                    node: endpoint.as_str().to_string(),
                });
            }
        }
    }
    Ok(())
}
