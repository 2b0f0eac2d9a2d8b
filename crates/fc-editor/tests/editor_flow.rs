//! Integration tests: controller ↔ store (fc-editor ↔ fc-core).
//!
//! Drives a whole editing session through `Controller::handle` and
//! checks the resulting store state, exercising the cross-crate
//! boundary the way the rendering surface would.

use fc_core::geometry::ViewportTransform;
use fc_core::id::NodeId;
use fc_core::model::{NodeKind, Position};
use fc_core::store::GraphStore;
use fc_editor::Controller;
use fc_editor::input::EditorEvent;
use pretty_assertions::assert_eq;

const ZOOMED: ViewportTransform = ViewportTransform {
    pan_x: 200.0,
    pan_y: 100.0,
    zoom: 0.5,
};

fn drop_node(ctl: &mut Controller, store: &mut GraphStore, kind: NodeKind, x: f32, y: f32) {
    ctl.handle(store, EditorEvent::PaletteDragStart { kind });
    ctl.handle(
        store,
        EditorEvent::CanvasDrop {
            x,
            y,
            on_canvas: true,
        },
    );
}

#[test]
fn place_connect_edit_delete_session() {
    let mut store = GraphStore::new();
    let mut ctl = Controller::new();

    // Place two nodes from the palette.
    drop_node(&mut ctl, &mut store, NodeKind::Start, 100.0, 100.0);
    drop_node(&mut ctl, &mut store, NodeKind::Process, 100.0, 300.0);
    assert_eq!(store.nodes().len(), 2);
    let start = store.nodes()[0].id;
    let process = store.nodes()[1].id;

    // Connect them.
    ctl.handle(&mut store, EditorEvent::ConnectStart { source: start });
    ctl.handle(
        &mut store,
        EditorEvent::ConnectRelease {
            target: Some(process),
        },
    );
    assert_eq!(store.edges().len(), 1);

    // Rename the process node via the inline editor.
    ctl.handle(&mut store, EditorEvent::DoubleClick { id: process });
    ctl.handle(
        &mut store,
        EditorEvent::EditInput {
            id: process,
            value: "Validate input".into(),
        },
    );
    ctl.handle(&mut store, EditorEvent::EditConfirm { id: process });
    assert_eq!(store.node(process).unwrap().label, "Validate input");

    // Delete the start node; the edge cascades with it.
    ctl.handle(&mut store, EditorEvent::DeleteClick { id: start });
    assert_eq!(store.nodes().len(), 1);
    assert!(store.edges().is_empty());
}

#[test]
fn edit_cancel_roundtrip_preserves_label() {
    let mut store = GraphStore::with_seed();
    let mut ctl = Controller::new();
    let node = NodeId::intern("3");
    let original = store.node(node).unwrap().label.clone();

    ctl.handle(&mut store, EditorEvent::DoubleClick { id: node });
    for draft in ["C", "Cre", "Cremate Process", ""] {
        ctl.handle(
            &mut store,
            EditorEvent::EditInput {
                id: node,
                value: draft.into(),
            },
        );
    }
    ctl.handle(&mut store, EditorEvent::EditCancel { id: node });

    assert_eq!(store.node(node).unwrap().label, original);
    assert!(!ctl.label_editor().is_editing(node));
}

#[test]
fn node_drag_maps_screen_to_canvas() {
    let mut store = GraphStore::new();
    let mut ctl = Controller::new();
    ctl.handle(&mut store, EditorEvent::ViewChanged { transform: ZOOMED });

    drop_node(&mut ctl, &mut store, NodeKind::Text, 200.0, 100.0);
    let id = store.nodes()[0].id;
    // Drop at the pan origin lands at canvas (0, 0).
    assert_eq!(store.node(id).unwrap().position, Position::new(0.0, 0.0));

    ctl.handle(
        &mut store,
        EditorEvent::NodeDrag {
            id,
            x: 250.0,
            y: 150.0,
        },
    );
    // 50 screen px at zoom 0.5 = 100 canvas units.
    assert_eq!(store.node(id).unwrap().position, Position::new(100.0, 100.0));
}

#[test]
fn events_on_stale_ids_are_noops() {
    let mut store = GraphStore::with_seed();
    let mut ctl = Controller::new();
    let ghost = NodeId::intern("deleted-elsewhere");

    let nodes_before = store.nodes().len();
    ctl.handle(&mut store, EditorEvent::DeleteClick { id: ghost });
    ctl.handle(
        &mut store,
        EditorEvent::NodeDrag {
            id: ghost,
            x: 1.0,
            y: 1.0,
        },
    );
    ctl.handle(&mut store, EditorEvent::ConnectStart { source: ghost });
    ctl.handle(
        &mut store,
        EditorEvent::ConnectRelease {
            target: Some(ghost),
        },
    );

    assert_eq!(store.nodes().len(), nodes_before);
    assert_eq!(store.edges().len(), 3);
}
