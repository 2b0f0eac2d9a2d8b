//! Input abstraction layer.
//!
//! Normalizes the rendering surface's raw interaction events into a
//! unified `EditorEvent` enum consumed by the controller. The surface
//! performs hit-testing (it owns node geometry) and reports hits as
//! node ids; pointer coordinates arrive in screen space.

use fc_core::geometry::ViewportTransform;
use fc_core::id::NodeId;
use fc_core::model::NodeKind;

/// A normalized interaction event.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A palette entry started being dragged; `kind` is the drag payload.
    PaletteDragStart { kind: NodeKind },

    /// Pointer released over the editor. Screen coordinates; `on_canvas`
    /// is false when the drop landed outside the canvas bounds.
    CanvasDrop { x: f32, y: f32, on_canvas: bool },

    /// An existing node dragged to a new screen position.
    NodeDrag { id: NodeId, x: f32, y: f32 },

    /// Drag started from a node's connection point.
    ConnectStart { source: NodeId },

    /// Connect gesture released; `target` is the node under the pointer,
    /// or `None` over empty canvas.
    ConnectRelease { target: Option<NodeId> },

    /// Double-click on a node opens inline label editing.
    DoubleClick { id: NodeId },

    /// Keystroke inside the active label editor.
    EditInput { id: NodeId, value: String },

    /// Commit the edited label (Enter / check button).
    EditConfirm { id: NodeId },

    /// Discard the edited label (Escape / cross button).
    EditCancel { id: NodeId },

    /// Delete button on a node.
    DeleteClick { id: NodeId },

    /// The surface panned or zoomed.
    ViewChanged { transform: ViewportTransform },
}
