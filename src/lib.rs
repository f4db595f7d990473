//! knd-dnd: Selektions- und Drag-Engine für Listen und Grids.
//! Core-Funktionalität als Library exportiert für Hosts, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    DndCommand, DndController, DndEngine, DndIntent, DndState, DragRenderer, ItemWatch, NoDragUi,
    SelectedWatch, Subscription,
};
pub use core::{
    derive_state_map, items_in_between, ById, DndError, DndResult, Identifiable,
    IdentityResolutionError, IdentityResolver, ItemState, Projection, SelectedItems, Severity,
    StateMap,
};
pub use shared::{CssClassOptions, DndOptions};
pub use ui::{collect_key_intents, Key, KeyEvent, Selectable};
