//! Item-Registry: die geordnete Menge aktuell interaktiver (sichtbarer) Items.

use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Live-Registry aller Items, die aktuell gerendert werden.
///
/// Wird bei jeder Änderung der gerenderten Menge komplett ersetzt.
/// `Arc` erlaubt O(1)-Snapshots für Beobachter.
#[derive(Debug, Clone)]
pub struct ItemRegistry<K, T> {
    items: Arc<IndexMap<K, T>>,
}

impl<K, T> Default for ItemRegistry<K, T> {
    fn default() -> Self {
        Self {
            items: Arc::new(IndexMap::new()),
        }
    }
}

impl<K, T> ItemRegistry<K, T>
where
    K: Hash + Eq + fmt::Debug,
{
    /// Baut eine Registry aus bereits aufgelösten Einträgen.
    ///
    /// Doppelte Schlüssel gelten als dasselbe Item: Die erste Position bleibt,
    /// der spätere Wert wird verworfen.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, T)>) -> Self {
        let iter = entries.into_iter();
        let mut items = IndexMap::with_capacity(iter.size_hint().0);
        for (key, item) in iter {
            if items.contains_key(&key) {
                log::warn!("Registry enthält Schlüssel {key:?} mehrfach, Duplikat wird ignoriert");
                continue;
            }
            items.insert(key, item);
        }
        Self {
            items: Arc::new(items),
        }
    }

    /// Position eines Schlüssels in Registry-Reihenfolge.
    #[inline]
    pub fn position(&self, key: &K) -> Option<usize> {
        self.items.get_index_of(key)
    }

    /// Gibt `true` zurück, wenn der Schlüssel registriert ist.
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Gibt das registrierte Item zum Schlüssel zurück.
    pub fn get(&self, key: &K) -> Option<&T> {
        self.items.get(key)
    }

    /// Eintrag an einer Position.
    pub fn get_index(&self, index: usize) -> Option<(&K, &T)> {
        self.items.get_index(index)
    }

    /// Anzahl registrierter Items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Gibt `true` zurück, wenn keine Items registriert sind.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iteriert in Registry-Reihenfolge.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, T> {
        self.items.iter()
    }
}
