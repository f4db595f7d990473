//! Live-Sichten auf einzelne Items.
//!
//! Eine Sicht hält nur den Schlüssel und eine Zelle mit dem letzten Wert,
//! nie das Item selbst. Drop beendet die Anmeldung am Publisher.

use std::cell::Cell;
use std::rc::Rc;

use super::publisher::Subscription;
use crate::core::ItemState;

/// Abgeleiteter Zustand eines Items, aktualisiert bei jeder neuen State-Map.
///
/// Nicht registrierte Items melden den neutralen Zustand.
#[derive(Debug)]
pub struct ItemWatch<K> {
    key: K,
    state: Rc<Cell<ItemState>>,
    _subscription: Subscription,
}

impl<K> ItemWatch<K> {
    pub(crate) fn new(key: K, state: Rc<Cell<ItemState>>, subscription: Subscription) -> Self {
        Self {
            key,
            state,
            _subscription: subscription,
        }
    }

    /// Schlüssel des beobachteten Items.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Zuletzt veröffentlichter Zustand.
    pub fn get(&self) -> ItemState {
        self.state.get()
    }

    /// Gibt `true` zurück, wenn das Item selektiert ist.
    pub fn is_selected(&self) -> bool {
        self.get().is_selected
    }

    /// Gibt `true` zurück, wenn das Item im ausstehenden Shift-Bereich liegt.
    pub fn is_shift_hovered(&self) -> bool {
        self.get().is_shift_hovered
    }

    /// Gibt `true` zurück, wenn das Item gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.get().is_dragging
    }
}

/// Selektionsstatus eines Items, unabhängig von der Registry.
#[derive(Debug)]
pub struct SelectedWatch<K> {
    key: K,
    selected: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl<K> SelectedWatch<K> {
    pub(crate) fn new(key: K, selected: Rc<Cell<bool>>, subscription: Subscription) -> Self {
        Self {
            key,
            selected,
            _subscription: subscription,
        }
    }

    /// Schlüssel des beobachteten Items.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Gibt `true` zurück, wenn das Item aktuell selektiert ist.
    pub fn get(&self) -> bool {
        self.selected.get()
    }
}
