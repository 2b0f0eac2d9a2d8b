pub mod geometry;
pub mod id;
pub mod model;
pub mod palette;
pub mod payload;
pub mod seed;
pub mod store;

pub use geometry::{ScreenPoint, ViewportTransform};
pub use id::{EdgeId, NodeId};
pub use model::*;
pub use palette::{PALETTE, PaletteItem};
pub use payload::GraphPayload;
pub use store::{GraphStore, StoreEvent};
