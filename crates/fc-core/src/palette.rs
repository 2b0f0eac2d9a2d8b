//! The sidebar palette — static catalog of placeable node kinds.
//!
//! Stateless; the rendering surface displays it and attaches the chosen
//! kind as the drag payload consumed by the interaction controller.

use crate::model::NodeKind;

/// One draggable palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub kind: NodeKind,
    /// Display label shown in the sidebar.
    pub label: &'static str,
}

/// Sidebar order: text, decision, process, start.
pub const PALETTE: [PaletteItem; 4] = [
    PaletteItem {
        kind: NodeKind::Text,
        label: "Text Node",
    },
    PaletteItem {
        kind: NodeKind::Decision,
        label: "Decision",
    },
    PaletteItem {
        kind: NodeKind::Process,
        label: "Process",
    },
    PaletteItem {
        kind: NodeKind::Start,
        label: "Start/End",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_every_kind_once() {
        for kind in [
            NodeKind::Start,
            NodeKind::Process,
            NodeKind::Decision,
            NodeKind::Text,
        ] {
            assert_eq!(PALETTE.iter().filter(|p| p.kind == kind).count(), 1);
        }
    }
}
