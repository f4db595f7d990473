//! Application-Layer: Engine, Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod drag_ui;
pub mod engine;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod publisher;
/// Engine-State
///
/// Hält Registry, Selektion, Signale und die zuletzt abgeleitete State-Map.
pub mod state;
pub mod watch;

pub use command_log::CommandLog;
pub use controller::DndController;
pub use drag_ui::{DragRenderer, DragUiRequest, NoDragUi};
pub use engine::{DndEngine, SharedStateMap};
pub use events::{DndCommand, DndIntent};
pub use publisher::{Publisher, Subscription};
pub use state::{DndState, KeyOf};
pub use watch::{ItemWatch, SelectedWatch};
