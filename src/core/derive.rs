//! Ableitung der State-Map aus Registry, Selektion und Signalen.
//!
//! Ein Durchlauf:
//! 1. Ein neutraler Eintrag pro registriertem Item
//! 2. `is_selected` für alle selektierten Items mit Eintrag
//! 3. `is_shift_hovered` für den Bereich Hover..Anker (nur bei aktivem Shift)
//! 4. `is_dragging` für alle selektierten Items mit Eintrag (nur beim Ziehen)
//!
//! Schritte 2–4 schreiben disjunkte Flags, das Ergebnis ist deterministisch.

use indexmap::IndexMap;
use std::hash::Hash;

use super::item_state::StateMap;
use super::range::span_between;
use super::registry::ItemRegistry;
use super::signals::InteractionSignals;

/// Berechnet die vollständige State-Map neu.
///
/// Selektierte Items, die nicht registriert sind, erhalten keinen Eintrag.
pub fn derive_state_map<K, T>(
    registry: &ItemRegistry<K, T>,
    selected: &IndexMap<K, T>,
    signals: &InteractionSignals<K, T>,
) -> StateMap<K, T>
where
    K: Clone + Hash + Eq + std::fmt::Debug,
    T: Clone,
{
    let mut map = StateMap::with_capacity(registry.len());

    for (key, item) in registry.iter() {
        map.insert(key.clone(), item.clone());
    }

    for key in selected.keys() {
        if let Some(state) = map.state_mut(key) {
            state.is_selected = true;
        }
    }

    if let Some(span) = shift_span(registry, signals) {
        for index in span {
            let Some((key, _)) = registry.get_index(index) else {
                break;
            };
            if let Some(state) = map.state_mut(key) {
                state.is_shift_hovered = true;
            }
        }
    }

    if signals.is_dragging() {
        for key in selected.keys() {
            if let Some(state) = map.state_mut(key) {
                state.is_dragging = true;
            }
        }
    }

    map
}

/// Positionsbereich zwischen Hover und Anker, falls Shift aktiv ist und
/// beide registriert sind.
fn shift_span<K, T>(
    registry: &ItemRegistry<K, T>,
    signals: &InteractionSignals<K, T>,
) -> Option<std::ops::RangeInclusive<usize>>
where
    K: Hash + Eq + std::fmt::Debug,
{
    if !signals.shift_active() {
        return None;
    }
    let hovered = signals.hovered()?;
    let anchor = signals.latest_selected()?;
    span_between(registry.position(&hovered.key), registry.position(&anchor.key))
}
