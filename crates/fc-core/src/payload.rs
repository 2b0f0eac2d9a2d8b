//! The `{nodes, edges}` wire schema.
//!
//! One shape serves two collaborators: the generation capability's
//! structured response and the persistence import/export files. Node
//! `kind` is carried as a raw string here so degraded generator output
//! can be coerced (unknown kinds become `text`) instead of failing the
//! whole payload; everything else is validated strictly.

use crate::id::{EdgeId, NodeId};
use crate::model::{Edge, GraphError, Node, NodeKind, Position};
use crate::store::GraphStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePayload {
    pub id: String,
    /// Raw kind string; coerced to the closed enum by `into_graph`.
    pub kind: String,
    pub position: Position,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePayload {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// A candidate graph as parsed from external text or a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<NodePayload>,
    pub edges: Vec<EdgePayload>,
}

impl GraphPayload {
    /// Shape a parsed JSON value into a payload. Missing `nodes`/`edges`
    /// keys, or a node lacking `id`/`kind`/`position`, fail here.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GraphError> {
        serde_json::from_value(value).map_err(|e| GraphError::Shape(e.to_string()))
    }

    /// Referential validation: unique ids, and every edge endpoint
    /// present among the payload's own nodes.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNodeId(node.id.clone()));
            }
        }
        let mut edge_ids = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateEdgeId(edge.id.clone()));
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingEdge {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Convert into typed graph collections, coercing unknown kinds.
    pub fn into_graph(self) -> (Vec<Node>, Vec<Edge>) {
        let nodes = self
            .nodes
            .into_iter()
            .map(|n| {
                Node::new(
                    NodeId::intern(&n.id),
                    NodeKind::parse_lenient(&n.kind),
                    n.position,
                    n.label,
                )
            })
            .collect();
        let edges = self
            .edges
            .into_iter()
            .map(|e| {
                Edge::new(
                    EdgeId::intern(&e.id),
                    NodeId::intern(&e.source),
                    NodeId::intern(&e.target),
                )
            })
            .collect();
        (nodes, edges)
    }

    /// Snapshot the live store for export.
    pub fn from_store(store: &GraphStore) -> Self {
        Self {
            nodes: store
                .nodes()
                .iter()
                .map(|n| NodePayload {
                    id: n.id.as_str().to_string(),
                    kind: n.kind.as_str().to_string(),
                    position: n.position,
                    label: n.label.clone(),
                })
                .collect(),
            edges: store
                .edges()
                .iter()
                .map(|e| EdgePayload {
                    id: e.id.as_str().to_string(),
                    source: e.source.as_str().to_string(),
                    target: e.target.as_str().to_string(),
                })
                .collect(),
        }
    }

    /// Serialize for file export.
    pub fn to_json(&self) -> String {
        // GraphPayload contains no map keys that can fail to serialize.
        serde_json::to_string_pretty(self).expect("payload serializes")
    }

    /// Parse and validate a file import.
    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| GraphError::Shape(e.to_string()))?;
        let payload = Self::from_value(value)?;
        payload.validate()?;
        Ok(payload)
    }
}
