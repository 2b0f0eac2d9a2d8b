pub mod controller;
pub mod editing;
pub mod input;

pub use controller::Controller;
pub use editing::LabelEditor;
pub use input::EditorEvent;
