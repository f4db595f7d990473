//! Interaktions-Signale: Shift, Hover, letzter Anker, Drag.

use std::hash::Hash;

/// Ein aufgelöstes Item samt Schlüssel.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<K, T> {
    pub key: K,
    pub item: T,
}

impl<K, T> Keyed<K, T> {
    /// Verknüpft einen Schlüssel mit seinem Item.
    pub fn new(key: K, item: T) -> Self {
        Self { key, item }
    }
}

/// Die vier unabhängig aktualisierten Eingangssignale einer Engine-Instanz.
///
/// Jeder Setter meldet zurück, ob sich das Signal tatsächlich geändert hat,
/// damit unnötige Neuberechnungen ausbleiben.
#[derive(Debug, Clone)]
pub struct InteractionSignals<K, T> {
    shift_active: bool,
    hovered: Option<Keyed<K, T>>,
    latest_selected: Option<Keyed<K, T>>,
    dragging: bool,
}

impl<K, T> Default for InteractionSignals<K, T> {
    fn default() -> Self {
        Self {
            shift_active: false,
            hovered: None,
            latest_selected: None,
            dragging: false,
        }
    }
}

impl<K: Hash + Eq, T> InteractionSignals<K, T> {
    /// Gibt `true` zurück, wenn Shift gehalten wird.
    pub fn shift_active(&self) -> bool {
        self.shift_active
    }

    /// Aktuell gehovertes Item.
    pub fn hovered(&self) -> Option<&Keyed<K, T>> {
        self.hovered.as_ref()
    }

    /// Anker für die Shift-Bereichsauswahl.
    pub fn latest_selected(&self) -> Option<&Keyed<K, T>> {
        self.latest_selected.as_ref()
    }

    /// Gibt `true` zurück, wenn gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Setzt den Shift-Modifier. Gibt `true` bei einem Wechsel zurück.
    pub fn set_shift_active(&mut self, active: bool) -> bool {
        let changed = self.shift_active != active;
        self.shift_active = active;
        changed
    }

    /// Setzt das gehoverte Item nur bei echtem Identitätswechsel.
    pub fn hover(&mut self, key: K, item: T) -> bool {
        if self.hovered.as_ref().is_some_and(|current| current.key == key) {
            return false;
        }
        self.hovered = Some(Keyed::new(key, item));
        true
    }

    /// Setzt den Hover zurück. Gibt `true` zurück, wenn vorher ein Item gehovert war.
    pub fn reset_hover(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// Setzt den Anker. Verglichen wird nur der Schlüssel.
    pub fn set_latest_selected(&mut self, latest: Option<Keyed<K, T>>) -> bool {
        let changed = match (&self.latest_selected, &latest) {
            (None, None) => false,
            (Some(old), Some(new)) => old.key != new.key,
            _ => true,
        };
        self.latest_selected = latest;
        changed
    }

    /// Setzt den Drag-Zustand. Gibt `true` bei einem Wechsel zurück.
    pub fn set_dragging(&mut self, dragging: bool) -> bool {
        let changed = self.dragging != dragging;
        self.dragging = dragging;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_only_changes_on_new_identity() {
        let mut signals = InteractionSignals::default();
        assert!(signals.hover(1, "a"));
        assert!(!signals.hover(1, "a"));
        assert!(signals.hover(2, "b"));
        assert_eq!(signals.hovered().map(|h| h.key), Some(2));
    }

    #[test]
    fn reset_hover_reports_change_only_when_set() {
        let mut signals: InteractionSignals<u32, &str> = InteractionSignals::default();
        assert!(!signals.reset_hover());
        signals.hover(1, "a");
        assert!(signals.reset_hover());
        assert!(signals.hovered().is_none());
    }

    #[test]
    fn boolean_setters_report_transitions() {
        let mut signals: InteractionSignals<u32, &str> = InteractionSignals::default();
        assert!(signals.set_shift_active(true));
        assert!(!signals.set_shift_active(true));
        assert!(signals.set_dragging(true));
        assert!(signals.set_dragging(false));
        assert!(!signals.is_dragging());
    }

    #[test]
    fn latest_selected_compares_by_key() {
        let mut signals = InteractionSignals::default();
        assert!(signals.set_latest_selected(Some(Keyed::new(1, "a"))));
        assert!(!signals.set_latest_selected(Some(Keyed::new(1, "a"))));
        assert!(signals.set_latest_selected(None));
        assert!(!signals.set_latest_selected(None));
    }
}
