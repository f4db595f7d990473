//! DndIntent- und DndCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::DndCommand;
pub use intent::DndIntent;
