//! Mapping von UI-Intents auf mutierende Dnd-Commands.
//!
//! Hier werden Items zu Schlüsseln aufgelöst. Ob ein Klick eine Einzel- oder
//! Bereichsselektion wird, entscheidet der aktuelle Signalzustand.

use super::state::{DndState, KeyOf};
use super::{DndCommand, DndIntent};
use crate::core::{DndResult, IdentityResolver, Keyed};

/// Übersetzt einen `DndIntent` in eine Sequenz ausführbarer `DndCommand`s.
///
/// Schlägt nur fehl, wenn das Item eines Einzel-Intents keinen Schlüssel hat.
pub fn map_intent_to_commands<T, R>(
    state: &DndState<T, R>,
    intent: DndIntent<T>,
) -> DndResult<Vec<DndCommand<KeyOf<T, R>, T>>>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    let commands = match intent {
        DndIntent::RegistryChanged { items } => {
            let mut entries = Vec::with_capacity(items.len());
            let mut rejected = Vec::new();
            for item in items {
                match state.resolver.resolve(&item) {
                    Ok(key) => entries.push(Keyed::new(key, item)),
                    Err(err) => {
                        log::warn!("Item wird nicht registriert: {err}");
                        rejected.push(err);
                    }
                }
            }
            vec![DndCommand::ReplaceRegistry { entries, rejected }]
        }
        DndIntent::SelectRequested { item } => {
            let target = Keyed::new(state.resolve(&item)?, item);
            vec![select_command(state, target)]
        }
        DndIntent::DeselectRequested { item } => {
            vec![DndCommand::Deselect {
                key: state.resolve(&item)?,
            }]
        }
        DndIntent::ToggleRequested { item } => {
            let key = state.resolve(&item)?;
            if state.selection.contains(&key) {
                vec![DndCommand::Deselect { key }]
            } else {
                vec![select_command(state, Keyed::new(key, item))]
            }
        }
        DndIntent::SelectAllRequested => vec![DndCommand::SelectAll],
        DndIntent::ClearSelectionRequested => vec![DndCommand::DeselectAll],
        DndIntent::PointerEntered { item } => {
            let target = Keyed::new(state.resolve(&item)?, item);
            vec![DndCommand::Hover { target }]
        }
        DndIntent::PointerLeft => vec![DndCommand::ResetHover],
        DndIntent::ShiftChanged { active } => vec![DndCommand::SetShiftActive { active }],
        DndIntent::DragStarted => vec![DndCommand::SetDragging { active: true }],
        DndIntent::DragEnded => vec![DndCommand::SetDragging { active: false }],
    };

    Ok(commands)
}

/// Bereichsselektion bei gehaltener Shift-Taste und vorhandenem Anker,
/// sonst Einzelselektion.
fn select_command<T, R>(
    state: &DndState<T, R>,
    target: Keyed<KeyOf<T, R>, T>,
) -> DndCommand<KeyOf<T, R>, T>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    if state.signals.shift_active() && state.signals.latest_selected().is_some() {
        DndCommand::SelectRange { target }
    } else {
        DndCommand::SelectSingle { target }
    }
}
