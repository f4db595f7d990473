//! Host-Adapter: Tastatur-Eingaben und Per-Item-Bindung.

pub mod keyboard;
pub mod selectable;

pub use keyboard::{collect_key_intents, Key, KeyEvent, KeyEventKind};
pub use selectable::Selectable;
