//! Per-node inline label editing.
//!
//! Each node is either `Viewing` (no session) or `Editing` (a session
//! holding the draft value). Confirm hands the draft back for commit;
//! cancel drops the session so the visible text reverts to the stored
//! label without any store write.

use fc_core::id::NodeId;
use fc_core::store::GraphStore;
use std::collections::HashMap;

/// Draft state for one node in `Editing`.
#[derive(Debug, Clone, PartialEq)]
struct EditSession {
    value: String,
}

/// Tracks which nodes are in the `Editing` state.
#[derive(Debug, Default)]
pub struct LabelEditor {
    sessions: HashMap<NodeId, EditSession>,
}

impl LabelEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Viewing → Editing`: open a session seeded with the stored label.
    /// No-op if the node is absent or already editing.
    pub fn begin(&mut self, store: &GraphStore, id: NodeId) {
        if self.sessions.contains_key(&id) {
            return;
        }
        let Some(node) = store.node(id) else {
            return;
        };
        self.sessions.insert(
            id,
            EditSession {
                value: node.label.clone(),
            },
        );
    }

    /// Replace the draft value. No-op unless the node is editing.
    pub fn input(&mut self, id: NodeId, value: String) {
        if let Some(session) = self.sessions.get_mut(&id) {
            session.value = value;
        }
    }

    /// `Editing → Viewing` with commit: close the session and return the
    /// draft for the caller to write via `update_node_label`.
    pub fn confirm(&mut self, id: NodeId) -> Option<String> {
        self.sessions.remove(&id).map(|s| s.value)
    }

    /// `Editing → Viewing` without commit: the draft is discarded.
    pub fn cancel(&mut self, id: NodeId) {
        self.sessions.remove(&id);
    }

    pub fn is_editing(&self, id: NodeId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Text the surface should display for a node: the draft while
    /// editing, the stored label otherwise.
    pub fn display_text<'a>(&'a self, store: &'a GraphStore, id: NodeId) -> Option<&'a str> {
        if let Some(session) = self.sessions.get(&id) {
            return Some(&session.value);
        }
        store.node(id).map(|n| n.label.as_str())
    }
}
