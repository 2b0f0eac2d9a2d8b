//! The interaction controller.
//!
//! Translates normalized `EditorEvent`s into graph store mutations,
//! mapping pointer coordinates through the current viewport transform.
//! The rendering surface never writes to the store directly — every
//! mutation funnels through `Controller::handle`.

use crate::editing::LabelEditor;
use crate::input::EditorEvent;
use fc_core::geometry::{ScreenPoint, ViewportTransform};
use fc_core::id::NodeId;
use fc_core::model::NodeKind;
use fc_core::store::GraphStore;

/// Holds the transient gesture state between events: the palette drag
/// payload, the pending connect source, and the per-node edit sessions.
#[derive(Debug, Default)]
pub struct Controller {
    transform: ViewportTransform,
    drag_payload: Option<NodeKind>,
    connect_from: Option<NodeId>,
    editor: LabelEditor,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    /// Whether a connect gesture is in progress (surface draws the
    /// provisional connection line).
    pub fn pending_connection(&self) -> Option<NodeId> {
        self.connect_from
    }

    pub fn label_editor(&self) -> &LabelEditor {
        &self.editor
    }

    /// Apply one event to the store. Events referencing stale ids fall
    /// through to the store's no-op semantics.
    pub fn handle(&mut self, store: &mut GraphStore, event: EditorEvent) {
        match event {
            EditorEvent::PaletteDragStart { kind } => {
                self.drag_payload = Some(kind);
            }
            EditorEvent::CanvasDrop { x, y, on_canvas } => {
                // A drop with no payload, or outside the canvas, is a
                // no-op; the payload is consumed either way.
                let payload = self.drag_payload.take();
                if !on_canvas {
                    log::debug!("drop outside canvas bounds ignored");
                    return;
                }
                if let Some(kind) = payload {
                    let position = self.transform.to_canvas(ScreenPoint::new(x, y));
                    store.add_node(kind, position, kind.default_label());
                }
            }
            EditorEvent::NodeDrag { id, x, y } => {
                let position = self.transform.to_canvas(ScreenPoint::new(x, y));
                store.move_node(id, position);
            }
            EditorEvent::ConnectStart { source } => {
                self.connect_from = Some(source);
            }
            EditorEvent::ConnectRelease { target } => {
                let source = self.connect_from.take();
                match (source, target) {
                    (Some(source), Some(target)) => {
                        let _ = store.add_edge(source, target);
                    }
                    // Released over empty canvas: abandoned, no mutation.
                    _ => log::debug!("connect gesture abandoned"),
                }
            }
            EditorEvent::DoubleClick { id } => {
                self.editor.begin(store, id);
            }
            EditorEvent::EditInput { id, value } => {
                self.editor.input(id, value);
            }
            EditorEvent::EditConfirm { id } => {
                if let Some(label) = self.editor.confirm(id) {
                    store.update_node_label(id, label);
                }
            }
            EditorEvent::EditCancel { id } => {
                self.editor.cancel(id);
            }
            EditorEvent::DeleteClick { id } => {
                self.editor.cancel(id);
                store.delete_node(id);
            }
            EditorEvent::ViewChanged { transform } => {
                self.transform = transform;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::model::Position;

    #[test]
    fn drop_maps_through_viewport_transform() {
        let mut store = GraphStore::new();
        let mut ctl = Controller::new();

        ctl.handle(
            &mut store,
            EditorEvent::ViewChanged {
                transform: ViewportTransform {
                    pan_x: 100.0,
                    pan_y: 0.0,
                    zoom: 2.0,
                },
            },
        );
        ctl.handle(
            &mut store,
            EditorEvent::PaletteDragStart {
                kind: NodeKind::Decision,
            },
        );
        ctl.handle(
            &mut store,
            EditorEvent::CanvasDrop {
                x: 300.0,
                y: 80.0,
                on_canvas: true,
            },
        );

        let node = &store.nodes()[0];
        assert_eq!(node.kind, NodeKind::Decision);
        assert_eq!(node.position, Position::new(100.0, 40.0));
        assert_eq!(node.label, "Decision Node");
    }

    #[test]
    fn drop_without_payload_is_noop() {
        let mut store = GraphStore::new();
        let mut ctl = Controller::new();
        ctl.handle(
            &mut store,
            EditorEvent::CanvasDrop {
                x: 10.0,
                y: 10.0,
                on_canvas: true,
            },
        );
        assert!(store.nodes().is_empty());
    }

    #[test]
    fn drop_outside_canvas_consumes_payload() {
        let mut store = GraphStore::new();
        let mut ctl = Controller::new();
        ctl.handle(
            &mut store,
            EditorEvent::PaletteDragStart {
                kind: NodeKind::Start,
            },
        );
        ctl.handle(
            &mut store,
            EditorEvent::CanvasDrop {
                x: 10.0,
                y: 10.0,
                on_canvas: false,
            },
        );
        assert!(store.nodes().is_empty());

        // A later on-canvas drop must not resurrect the stale payload.
        ctl.handle(
            &mut store,
            EditorEvent::CanvasDrop {
                x: 20.0,
                y: 20.0,
                on_canvas: true,
            },
        );
        assert!(store.nodes().is_empty());
    }

    #[test]
    fn connect_release_over_empty_canvas_abandons() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeKind::Start, Position::default(), "a".into());
        let mut ctl = Controller::new();

        ctl.handle(&mut store, EditorEvent::ConnectStart { source: a });
        assert_eq!(ctl.pending_connection(), Some(a));
        ctl.handle(&mut store, EditorEvent::ConnectRelease { target: None });

        assert!(store.edges().is_empty());
        assert_eq!(ctl.pending_connection(), None);
    }

    #[test]
    fn connect_release_over_node_adds_edge() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeKind::Start, Position::default(), "a".into());
        let b = store.add_node(NodeKind::Process, Position::default(), "b".into());
        let mut ctl = Controller::new();

        ctl.handle(&mut store, EditorEvent::ConnectStart { source: a });
        ctl.handle(&mut store, EditorEvent::ConnectRelease { target: Some(b) });

        assert_eq!(store.edges().len(), 1);
        assert_eq!(store.edges()[0].source, a);
        assert_eq!(store.edges()[0].target, b);
    }

    #[test]
    fn delete_click_closes_edit_session() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeKind::Text, Position::default(), "a".into());
        let mut ctl = Controller::new();

        ctl.handle(&mut store, EditorEvent::DoubleClick { id: a });
        assert!(ctl.label_editor().is_editing(a));
        ctl.handle(&mut store, EditorEvent::DeleteClick { id: a });

        assert!(store.nodes().is_empty());
        assert!(!ctl.label_editor().is_editing(a));
    }
}
