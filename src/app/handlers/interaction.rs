//! Handler für Interaktions-Signale: Hover, Shift-Modifier und Drag.

use crate::app::drag_ui::DragUiRequest;
use crate::app::state::{DndState, KeyOf};
use crate::core::{IdentityResolver, Keyed};

/// Setzt das gehoverte Item (nur bei Identitätswechsel).
pub fn hover<T, R>(state: &mut DndState<T, R>, target: Keyed<KeyOf<T, R>, T>)
where
    T: Clone,
    R: IdentityResolver<T>,
{
    log::trace!("Hover: {:?}", target.key);
    if state.signals.hover(target.key, target.item) {
        state.mark_changed();
    }
}

/// Setzt den Hover zurück (Pointer hat das Item verlassen).
pub fn reset_hover<T, R>(state: &mut DndState<T, R>)
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if state.signals.reset_hover() {
        log::trace!("Hover zurückgesetzt");
        state.mark_changed();
    }
}

/// Setzt den Shift-Modifier.
pub fn set_shift_active<T, R>(state: &mut DndState<T, R>, active: bool)
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if state.signals.set_shift_active(active) {
        state.mark_changed();
    }
}

/// Setzt den Drag-Zustand und beauftragt bei jedem Übergang den
/// Zeichen-Kollaborator (anzeigen mit allen selektierten Items / ausblenden).
pub fn set_dragging<T, R>(state: &mut DndState<T, R>, active: bool)
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if !state.signals.set_dragging(active) {
        return;
    }
    state.mark_changed();

    let request = if active {
        DragUiRequest::Show(state.selection.items().values().cloned().collect())
    } else {
        DragUiRequest::Hide
    };
    state.request_drag_ui(request);
}
