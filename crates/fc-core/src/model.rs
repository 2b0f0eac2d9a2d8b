//! Flowchart data model.
//!
//! The graph is a flat collection of typed nodes and directed edges —
//! no containment hierarchy. Node positions are canvas coordinates,
//! either user-placed (drag) or supplied verbatim by the generator.

use crate::id::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Node kinds ──────────────────────────────────────────────────────────

/// The closed set of placeable node kinds. A node's kind determines only
/// its rendered shape, never its connectivity — any kind may connect to
/// any kind. Kind is fixed at creation; changing it is delete + create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Process,
    Decision,
    Text,
}

/// Shape hint consumed by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Circle,
    Rect,
    Diamond,
    Plain,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Process => "process",
            NodeKind::Decision => "decision",
            NodeKind::Text => "text",
        }
    }

    /// Strict parse — `None` for anything outside the enumeration.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(NodeKind::Start),
            "process" => Some(NodeKind::Process),
            "decision" => Some(NodeKind::Decision),
            "text" => Some(NodeKind::Text),
            _ => None,
        }
    }

    /// Lenient parse for generator output: unrecognized kinds coerce to
    /// `Text` rather than failing the whole payload.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("unknown node kind {s:?}, coercing to text");
            NodeKind::Text
        })
    }

    pub fn shape(&self) -> NodeShape {
        match self {
            NodeKind::Start => NodeShape::Circle,
            NodeKind::Process => NodeShape::Rect,
            NodeKind::Decision => NodeShape::Diamond,
            NodeKind::Text => NodeShape::Plain,
        }
    }

    /// Label given to a freshly dropped node, e.g. "Process Node".
    pub fn default_label(&self) -> String {
        let name = match self {
            NodeKind::Start => "Start",
            NodeKind::Process => "Process",
            NodeKind::Decision => "Decision",
            NodeKind::Text => "Text",
        };
        format!("{name} Node")
    }
}

// ─── Nodes & edges ───────────────────────────────────────────────────────

/// A point in canvas (model) space. The canvas is unbounded; any value
/// is valid, including negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A placeable graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within the graph, immutable once created.
    pub id: NodeId,
    /// Fixed at creation.
    pub kind: NodeKind,
    /// Canvas coordinates, mutable by drag.
    pub position: Position,
    /// Mutable, may be empty.
    pub label: String,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, position: Position, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            position,
            label: label.into(),
        }
    }
}

/// Cosmetic edge attributes — no semantic effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Stroke color as a hex string, e.g. `#94A3B8`. `None` = surface default.
    pub stroke: Option<String>,
    pub stroke_width: f32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: None,
            stroke_width: 2.0,
        }
    }
}

/// A directed connection between two existing nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            style: EdgeStyle::default(),
        }
    }

    /// Whether this edge references the given node at either endpoint.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────

/// Structural/referential validation failures for a candidate graph.
/// Store mutations on absent ids are no-ops, not errors; `GraphError`
/// only arises from bulk candidates (generation ingest, import).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Payload parsed as JSON but does not match the `{nodes, edges}` shape.
    #[error("payload shape mismatch: {0}")]
    Shape(String),

    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(String),

    #[error("duplicate edge id `{0}`")]
    DuplicateEdgeId(String),

    /// An edge endpoint references a node not present in the candidate.
    #[error("edge `{edge}` references missing node `{node}`")]
    DanglingEdge { edge: String, node: String },
}
