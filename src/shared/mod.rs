//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::{CssClassOptions, DndOptions};
pub use options::{CSS_CLASS_DRAGGING, CSS_CLASS_SELECTED, CSS_CLASS_SHIFT_HOVERED};
