//! Handler für die Item-Registry (gerenderte Item-Menge).

use crate::app::state::{DndState, KeyOf};
use crate::core::{DndResult, IdentityResolutionError, IdentityResolver, ItemRegistry, Keyed};

/// Ersetzt die Registry durch die neu gerenderte Item-Menge.
///
/// Items ohne Schlüssel wurden bereits beim Mapping aussortiert; die übrigen
/// werden trotzdem übernommen, der erste Fehler geht an den Aufrufer.
pub fn replace<T, R>(
    state: &mut DndState<T, R>,
    entries: Vec<Keyed<KeyOf<T, R>, T>>,
    rejected: Vec<IdentityResolutionError>,
) -> DndResult<()>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    let registry = ItemRegistry::from_entries(entries.into_iter().map(|e| (e.key, e.item)));
    log::debug!(
        "Registry aktualisiert: {} Items, {} abgelehnt",
        registry.len(),
        rejected.len()
    );

    // Auch bei gleichen Schlüsseln ersetzen: die Items selbst können neu sein.
    state.registry = registry;
    state.mark_changed();

    // Ein entferntes Item kann kein Pointer-Leave mehr melden.
    let hover_unmounted = state
        .signals
        .hovered()
        .is_some_and(|hovered| !state.registry.contains(&hovered.key));
    if hover_unmounted && state.signals.reset_hover() {
        log::debug!("Gehovertes Item ist nicht mehr registriert, Hover zurückgesetzt");
    }

    match rejected.into_iter().next() {
        Some(first) => Err(first.into()),
        None => Ok(()),
    }
}
