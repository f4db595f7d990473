use std::fmt;

use crate::core::{IdentityResolutionError, Keyed};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Im Gegensatz zu Intents tragen Commands bereits aufgelöste Schlüssel.
#[derive(Clone)]
pub enum DndCommand<K, T> {
    /// Registry komplett ersetzen; `rejected` enthält Items ohne Schlüssel
    ReplaceRegistry {
        entries: Vec<Keyed<K, T>>,
        rejected: Vec<IdentityResolutionError>,
    },
    /// Einzelnes Item selektieren
    SelectSingle { target: Keyed<K, T> },
    /// Shift-Bereich zwischen Anker und Hover selektieren
    SelectRange { target: Keyed<K, T> },
    /// Alle registrierten Items selektieren
    SelectAll,
    /// Item deselektieren
    Deselect { key: K },
    /// Selektion vollständig aufheben
    DeselectAll,
    /// Gehovertes Item setzen
    Hover { target: Keyed<K, T> },
    /// Hover zurücksetzen
    ResetHover,
    /// Shift-Modifier setzen
    SetShiftActive { active: bool },
    /// Drag-Zustand setzen
    SetDragging { active: bool },
}

// Items sind für die Engine opak, geloggt werden nur Schlüssel.
impl<K: fmt::Debug, T> fmt::Debug for DndCommand<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReplaceRegistry { entries, rejected } => f
                .debug_struct("ReplaceRegistry")
                .field("keys", &entries.iter().map(|e| &e.key).collect::<Vec<_>>())
                .field("rejected", &rejected.len())
                .finish(),
            Self::SelectSingle { target } => {
                f.debug_struct("SelectSingle").field("key", &target.key).finish()
            }
            Self::SelectRange { target } => {
                f.debug_struct("SelectRange").field("key", &target.key).finish()
            }
            Self::SelectAll => f.write_str("SelectAll"),
            Self::Deselect { key } => f.debug_struct("Deselect").field("key", key).finish(),
            Self::DeselectAll => f.write_str("DeselectAll"),
            Self::Hover { target } => f.debug_struct("Hover").field("key", &target.key).finish(),
            Self::ResetHover => f.write_str("ResetHover"),
            Self::SetShiftActive { active } => f
                .debug_struct("SetShiftActive")
                .field("active", active)
                .finish(),
            Self::SetDragging { active } => f
                .debug_struct("SetDragging")
                .field("active", active)
                .finish(),
        }
    }
}
