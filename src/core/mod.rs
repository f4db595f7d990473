//! Core-Domäne: Identität, Bereichsauswahl, Registry, Selektion, Signale
//! und die Ableitung der State-Map.

pub mod derive;
pub mod error;
pub mod identity;
pub mod item_state;
pub mod range;
pub mod registry;
pub mod selection;
pub mod signals;

pub use derive::derive_state_map;
pub use error::{DndError, DndResult, IdentityResolutionError, Severity};
pub use identity::{ById, Identifiable, IdentityResolver, Projection};
pub use item_state::{ItemState, StateEntry, StateMap};
pub use range::{items_in_between, items_in_between_by, span_between};
pub use registry::ItemRegistry;
pub use selection::{SelectedItems, SelectionStore};
pub use signals::{InteractionSignals, Keyed};
