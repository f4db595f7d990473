//! Selection-Store: geordnete Menge der selektierten Items.

use indexmap::IndexMap;
use std::hash::Hash;
use std::sync::Arc;

/// Unveränderlicher Snapshot der Selektion (Schlüssel → Item, Einfügereihenfolge).
pub type SelectedItems<K, T> = Arc<IndexMap<K, T>>;

/// Hält die selektierten Items.
///
/// Beobachter erhalten `Arc`-Snapshots. Mutationen laufen über
/// `Arc::make_mut` (CoW): Solange ein Beobachter noch einen alten Snapshot
/// hält, wird kopiert statt in-place verändert.
#[derive(Debug, Clone)]
pub struct SelectionStore<K, T> {
    items: SelectedItems<K, T>,
}

impl<K, T> Default for SelectionStore<K, T> {
    fn default() -> Self {
        Self {
            items: Arc::new(IndexMap::new()),
        }
    }
}

impl<K, T> SelectionStore<K, T>
where
    K: Clone + Hash + Eq,
    T: Clone,
{
    /// Aktueller Snapshot (O(1)-Clone).
    pub fn snapshot(&self) -> SelectedItems<K, T> {
        Arc::clone(&self.items)
    }

    /// Read-only Sicht auf die Selektion.
    pub fn items(&self) -> &IndexMap<K, T> {
        &self.items
    }

    /// Gibt `true` zurück, wenn der Schlüssel selektiert ist.
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Anzahl selektierter Items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fügt ein Item hinzu. Gibt `false` zurück, wenn der Schlüssel schon enthalten war.
    pub fn insert(&mut self, key: K, item: T) -> bool {
        if self.items.contains_key(&key) {
            return false;
        }
        Arc::make_mut(&mut self.items).insert(key, item);
        true
    }

    /// Entfernt ein Item unter Erhalt der Reihenfolge der übrigen.
    pub fn remove(&mut self, key: &K) -> Option<T> {
        if !self.items.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.items).shift_remove(key)
    }

    /// Leert die Selektion. Ersetzt den Snapshot auch, wenn er bereits leer war.
    pub fn clear(&mut self) {
        self.items = Arc::new(IndexMap::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicate_keys() {
        let mut store = SelectionStore::default();
        assert!(store.insert(1, "a"));
        assert!(!store.insert(1, "a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn old_snapshot_is_not_mutated() {
        let mut store = SelectionStore::default();
        store.insert(1, "a");
        let before = store.snapshot();

        store.insert(2, "b");
        store.remove(&1);

        assert_eq!(before.len(), 1);
        assert!(before.contains_key(&1));
        assert_eq!(store.items().keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut store = SelectionStore::default();
        for (key, item) in [(3, "c"), (1, "a"), (2, "b")] {
            store.insert(key, item);
        }
        assert_eq!(store.remove(&1), Some("a"));
        assert_eq!(store.remove(&1), None);
        assert_eq!(store.items().keys().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn clear_always_yields_empty_store() {
        let mut store: SelectionStore<u8, &str> = SelectionStore::default();
        store.clear();
        assert!(store.is_empty());
        store.insert(1, "x");
        store.clear();
        assert!(store.is_empty());
    }
}
