//! Handler für Selektions-Operationen.

use crate::app::state::{DndState, KeyOf};
use crate::core::{DndError, DndResult, IdentityResolver, Keyed};

/// Meldet eine doppelte Selektion (Warnung, kein Zustandswechsel).
fn already_selected<T, R>(state: &DndState<T, R>, target: &Keyed<KeyOf<T, R>, T>) -> Option<DndError>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if !state.selection.contains(&target.key) {
        return None;
    }
    log::info!("Item {:?} ist bereits selektiert", target.key);
    Some(DndError::already_selected(&target.key))
}

/// Selektiert ein einzelnes Item und setzt es als neuen Anker.
pub fn select_single<T, R>(state: &mut DndState<T, R>, target: Keyed<KeyOf<T, R>, T>) -> DndResult<()>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if let Some(err) = already_selected(state, &target) {
        return Err(err);
    }

    state.selection.insert(target.key.clone(), target.item.clone());
    state.signals.set_latest_selected(Some(target));
    state.mark_selection_changed();
    Ok(())
}

/// Selektiert alle noch unselektierten Items im aktuellen Shift-Bereich
/// (Bereichsreihenfolge) und setzt das geklickte Item als neuen Anker.
///
/// Gibt es keinen Shift-Bereich (kein Hover oder Anker nicht registriert),
/// wird nichts selektiert; nur der Anker wechselt auf das geklickte Item.
pub fn select_range<T, R>(state: &mut DndState<T, R>, target: Keyed<KeyOf<T, R>, T>) -> DndResult<()>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if let Some(err) = already_selected(state, &target) {
        return Err(err);
    }

    let state_map = state.state_map();
    let pending: Vec<_> = state_map
        .pending_shift_range()
        .map(|(key, item)| (key.clone(), item.clone()))
        .collect();

    if pending.is_empty() {
        log::info!(
            "Kein Shift-Bereich für {:?} vorhanden, es wird nichts selektiert",
            target.key
        );
        if state.signals.set_latest_selected(Some(target)) {
            state.mark_changed();
        }
        return Ok(());
    }

    log::debug!("Shift-Bereich: {} Items werden selektiert", pending.len());
    for (key, item) in pending {
        state.selection.insert(key, item);
    }

    state.signals.set_latest_selected(Some(target));
    state.mark_selection_changed();
    Ok(())
}

/// Selektiert alle registrierten Items in Registry-Reihenfolge.
/// Das letzte neu selektierte Item wird zum Anker.
pub fn select_all<T, R>(state: &mut DndState<T, R>)
where
    T: Clone,
    R: IdentityResolver<T>,
{
    let mut last_added = None;
    for (key, item) in state.registry.iter() {
        if state.selection.insert(key.clone(), item.clone()) {
            last_added = Some(Keyed::new(key.clone(), item.clone()));
        }
    }

    let Some(anchor) = last_added else {
        log::debug!("Alle registrierten Items sind bereits selektiert");
        return;
    };

    state.signals.set_latest_selected(Some(anchor));
    state.mark_selection_changed();
    log::info!("Alle {} Items selektiert", state.selection.len());
}

/// Entfernt ein Item aus der Selektion und beendet den Shift-Anker.
pub fn deselect<T, R>(state: &mut DndState<T, R>, key: KeyOf<T, R>) -> DndResult<()>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if state.selection.remove(&key).is_none() {
        log::error!("Item {key:?} kann nicht deselektiert werden, da es nicht selektiert war");
        return Err(DndError::not_selected(&key));
    }

    state.signals.set_latest_selected(None);
    state.mark_selection_changed();
    Ok(())
}

/// Hebt die Selektion bedingungslos auf.
pub fn deselect_all<T, R>(state: &mut DndState<T, R>)
where
    T: Clone,
    R: IdentityResolver<T>,
{
    state.selection.clear();
    state.signals.set_latest_selected(None);
    state.mark_selection_changed();
    log::info!("Alle Items wurden deselektiert");
}
