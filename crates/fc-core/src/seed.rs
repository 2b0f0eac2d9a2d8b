//! The fixed illustrative graph installed at process start.

use crate::id::{EdgeId, NodeId};
use crate::model::{Edge, EdgeStyle, Node, NodeKind, Position};

/// Four nodes and three edges demonstrating each node kind.
pub fn seed_graph() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        Node::new(
            NodeId::intern("1"),
            NodeKind::Start,
            Position::new(300.0, 100.0),
            "Welcome to FlowCraft!",
        ),
        Node::new(
            NodeId::intern("2"),
            NodeKind::Text,
            Position::new(300.0, 250.0),
            "Drag nodes from sidebar",
        ),
        Node::new(
            NodeId::intern("3"),
            NodeKind::Process,
            Position::new(150.0, 400.0),
            "Create Process",
        ),
        Node::new(
            NodeId::intern("4"),
            NodeKind::Decision,
            Position::new(450.0, 400.0),
            "Make Decision?",
        ),
    ];

    let accent = EdgeStyle {
        stroke: Some("#6C5CE7".into()),
        stroke_width: 2.0,
    };
    let muted = EdgeStyle {
        stroke: Some("#94A3B8".into()),
        stroke_width: 2.0,
    };

    let edge = |id: &str, from: &str, to: &str, style: &EdgeStyle| Edge {
        id: EdgeId::intern(id),
        source: NodeId::intern(from),
        target: NodeId::intern(to),
        style: style.clone(),
    };

    let edges = vec![
        edge("e1-2", "1", "2", &accent),
        edge("e2-3", "2", "3", &muted),
        edge("e2-4", "2", "4", &muted),
    ];

    (nodes, edges)
}
