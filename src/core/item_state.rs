//! Abgeleiteter Interaktionszustand pro Item und die vollständige State-Map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Interaktionszustand eines einzelnen Items.
///
/// Wird nie autoritativ gespeichert, sondern bei jeder Änderung neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemState {
    /// Item ist Teil der Selektion
    pub is_selected: bool,
    /// Item liegt im Shift-Bereich zwischen Anker und Hover
    pub is_shift_hovered: bool,
    /// Item wird gerade gezogen
    pub is_dragging: bool,
}

/// Eintrag der State-Map: Item plus abgeleiteter Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry<T> {
    pub item: T,
    pub state: ItemState,
}

/// Schlüssel → (Item, Zustand) für genau die registrierten Items.
///
/// Reihenfolge entspricht der Registry-Reihenfolge.
#[derive(Debug, Clone)]
pub struct StateMap<K, T> {
    entries: IndexMap<K, StateEntry<T>>,
}

impl<K, T> Default for StateMap<K, T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, T> StateMap<K, T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, key: K, item: T) {
        self.entries.insert(
            key,
            StateEntry {
                item,
                state: ItemState::default(),
            },
        );
    }

    pub(crate) fn state_mut(&mut self, key: &K) -> Option<&mut ItemState> {
        self.entries.get_mut(key).map(|entry| &mut entry.state)
    }

    /// Eintrag zu einem Schlüssel. `None` für nicht registrierte Items,
    /// auch wenn diese selektiert sind.
    pub fn get(&self, key: &K) -> Option<&StateEntry<T>> {
        self.entries.get(key)
    }

    /// Zustand zu einem Schlüssel, neutraler Default für unbekannte Items.
    pub fn state_of(&self, key: &K) -> ItemState {
        self.get(key).map(|entry| entry.state).unwrap_or_default()
    }

    /// Prüft, ob ein Schlüssel in der Map enthalten ist.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Anzahl der Einträge (= registrierte Items).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Items registriert sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert in Registry-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &StateEntry<T>)> {
        self.entries.iter()
    }

    /// Schlüssel in Registry-Reihenfolge.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Items im Shift-Bereich, die noch nicht selektiert sind (Bereichsreihenfolge).
    pub fn pending_shift_range(&self) -> impl Iterator<Item = (&K, &T)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.state.is_shift_hovered && !entry.state.is_selected)
            .map(|(key, entry)| (key, &entry.item))
    }
}
