//! Engine-State: zentrale Datenhaltung einer Engine-Instanz.

use std::sync::Arc;

use super::drag_ui::DragUiRequest;
use super::CommandLog;
use crate::core::{
    derive_state_map, DndResult, IdentityResolver, InteractionSignals, ItemRegistry,
    SelectionStore, StateMap,
};
use crate::shared::DndOptions;

/// Schlüsseltyp, den der Resolver `R` für Items `T` liefert.
pub type KeyOf<T, R> = <R as IdentityResolver<T>>::Key;

/// Hauptzustand einer Engine-Instanz.
///
/// Alle Eingänge (Registry, Selektion, Signale) liegen hier; die State-Map
/// wird nach jeder Änderung über [`DndState::refresh`] neu abgeleitet.
pub struct DndState<T, R: IdentityResolver<T>> {
    /// Identitäts-Policy
    pub resolver: R,
    /// Aktuell gerenderte Items
    pub registry: ItemRegistry<KeyOf<T, R>, T>,
    /// Selektierte Items (CoW-Snapshots)
    pub selection: SelectionStore<KeyOf<T, R>, T>,
    /// Shift/Hover/Anker/Drag
    pub signals: InteractionSignals<KeyOf<T, R>, T>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: DndOptions,
    state_map: Arc<StateMap<KeyOf<T, R>, T>>,
    revision: u64,
    derived_revision: u64,
    selection_revision: u64,
    drag_ui_requests: Vec<DragUiRequest<T>>,
}

impl<T, R> DndState<T, R>
where
    T: Clone,
    R: IdentityResolver<T>,
{
    /// Erstellt einen leeren State mit der gegebenen Identitäts-Policy.
    pub fn new(resolver: R, options: DndOptions) -> Self {
        Self {
            resolver,
            registry: ItemRegistry::default(),
            selection: SelectionStore::default(),
            signals: InteractionSignals::default(),
            command_log: CommandLog::with_capacity(options.command_log_capacity),
            options,
            state_map: Arc::new(StateMap::default()),
            revision: 0,
            derived_revision: 0,
            selection_revision: 0,
            drag_ui_requests: Vec::new(),
        }
    }

    /// Löst den Schlüssel eines Items auf.
    pub fn resolve(&self, item: &T) -> DndResult<KeyOf<T, R>> {
        self.resolver.resolve(item).map_err(|err| {
            log::warn!("Operation abgelehnt: {err}");
            err.into()
        })
    }

    /// Zuletzt abgeleitete State-Map (O(1)-Clone).
    pub fn state_map(&self) -> Arc<StateMap<KeyOf<T, R>, T>> {
        Arc::clone(&self.state_map)
    }

    /// Zähler, der bei jeder Eingangsänderung steigt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Zähler, der bei jeder Selektionsänderung steigt.
    pub fn selection_revision(&self) -> u64 {
        self.selection_revision
    }

    /// Markiert eine Änderung an Registry oder Signalen.
    pub fn mark_changed(&mut self) {
        self.revision += 1;
    }

    /// Markiert eine Änderung der Selektion.
    pub fn mark_selection_changed(&mut self) {
        self.selection_revision += 1;
        self.mark_changed();
    }

    /// Leitet die State-Map neu ab, falls sich seit dem letzten Durchlauf
    /// ein Eingang geändert hat.
    pub fn refresh(&mut self) {
        if self.derived_revision == self.revision {
            return;
        }
        let map = derive_state_map(&self.registry, self.selection.items(), &self.signals);
        log::debug!(
            "State-Map neu abgeleitet (Revision {}, {} Einträge, {} selektiert)",
            self.revision,
            map.len(),
            self.selection.len()
        );
        self.state_map = Arc::new(map);
        self.derived_revision = self.revision;
    }

    pub(crate) fn request_drag_ui(&mut self, request: DragUiRequest<T>) {
        self.drag_ui_requests.push(request);
    }

    pub(crate) fn take_drag_ui_requests(&mut self) -> Vec<DragUiRequest<T>> {
        std::mem::take(&mut self.drag_ui_requests)
    }
}
