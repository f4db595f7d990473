//! Controller für die zentrale Intent- und Command-Verarbeitung.

use super::state::{DndState, KeyOf};
use super::{DndCommand, DndIntent};
use crate::core::{DndResult, IdentityResolver};

/// Führt Intents und Commands auf einem `DndState` aus.
#[derive(Debug, Default, Clone, Copy)]
pub struct DndController;

impl DndController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Bricht beim ersten fehlschlagenden Command ab. Bereits ausgeführte
    /// Commands bleiben wirksam.
    pub fn handle_intent<T, R>(
        &mut self,
        state: &mut DndState<T, R>,
        intent: DndIntent<T>,
    ) -> DndResult<()>
    where
        T: Clone,
        R: IdentityResolver<T>,
    {
        let commands = self.map_intent_to_commands(state, intent)?;
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Übersetzt einen Intent, ohne ihn auszuführen.
    pub fn map_intent_to_commands<T, R>(
        &self,
        state: &DndState<T, R>,
        intent: DndIntent<T>,
    ) -> DndResult<Vec<DndCommand<KeyOf<T, R>, T>>>
    where
        T: Clone,
        R: IdentityResolver<T>,
    {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt einen mutierenden Command aus und leitet die State-Map neu ab.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<T, R>(
        &mut self,
        state: &mut DndState<T, R>,
        command: DndCommand<KeyOf<T, R>, T>,
    ) -> DndResult<()>
    where
        T: Clone,
        R: IdentityResolver<T>,
    {
        state.command_log.record(&command);
        use super::handlers;

        let result = match command {
            // === Registry ===
            DndCommand::ReplaceRegistry { entries, rejected } => {
                handlers::registry::replace(state, entries, rejected)
            }

            // === Selektion ===
            DndCommand::SelectSingle { target } => handlers::selection::select_single(state, target),
            DndCommand::SelectRange { target } => handlers::selection::select_range(state, target),
            DndCommand::SelectAll => {
                handlers::selection::select_all(state);
                Ok(())
            }
            DndCommand::Deselect { key } => handlers::selection::deselect(state, key),
            DndCommand::DeselectAll => {
                handlers::selection::deselect_all(state);
                Ok(())
            }

            // === Interaktion ===
            DndCommand::Hover { target } => {
                handlers::interaction::hover(state, target);
                Ok(())
            }
            DndCommand::ResetHover => {
                handlers::interaction::reset_hover(state);
                Ok(())
            }
            DndCommand::SetShiftActive { active } => {
                handlers::interaction::set_shift_active(state, active);
                Ok(())
            }
            DndCommand::SetDragging { active } => {
                handlers::interaction::set_dragging(state, active);
                Ok(())
            }
        };

        // Auch nach einem Fehler: teilweise übernommene Registry ableiten.
        state.refresh();
        result
    }
}
