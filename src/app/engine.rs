//! `DndEngine`: Fassade einer Selektions-/Drag-Engine-Instanz.
//!
//! Jede Operation läuft vollständig durch, bevor sie zurückkehrt:
//! Command ausführen → State-Map ableiten → Subscriber benachrichtigen →
//! Zeichen-Kollaborator beauftragen.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::drag_ui::{DragRenderer, NoDragUi};
use super::publisher::{Publisher, Subscription};
use super::state::{DndState, KeyOf};
use super::watch::{ItemWatch, SelectedWatch};
use super::{CommandLog, DndController, DndIntent};
use crate::core::{
    ById, DndResult, Identifiable, IdentityResolver, InteractionSignals, ItemState,
    SelectedItems, StateMap,
};
use crate::shared::DndOptions;

/// Veröffentlichte State-Map einer Engine mit Resolver `R`.
pub type SharedStateMap<T, R> = Arc<StateMap<KeyOf<T, R>, T>>;

/// Selektions- und Drag-Engine für eine Item-Liste.
///
/// `R` bestimmt, wie Items auf Schlüssel abgebildet werden. Standard ist
/// [`ById`] für Typen mit [`Identifiable`].
pub struct DndEngine<T, R = ById>
where
    T: Clone + 'static,
    R: IdentityResolver<T>,
    KeyOf<T, R>: 'static,
{
    state: DndState<T, R>,
    controller: DndController,
    state_maps: Publisher<SharedStateMap<T, R>>,
    selections: Publisher<SelectedItems<KeyOf<T, R>, T>>,
    drag_renderer: Box<dyn DragRenderer<T>>,
    published_revision: u64,
    published_selection_revision: u64,
    disposed: bool,
}

impl<T> DndEngine<T, ById>
where
    T: Identifiable + Clone + 'static,
    KeyOf<T, ById>: 'static,
{
    /// Engine mit Schlüsseln über [`Identifiable::id`].
    pub fn new() -> Self {
        Self::with_resolver(ById)
    }
}

impl<T> Default for DndEngine<T, ById>
where
    T: Identifiable + Clone + 'static,
    KeyOf<T, ById>: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> DndEngine<T, R>
where
    T: Clone + 'static,
    R: IdentityResolver<T>,
    KeyOf<T, R>: 'static,
{
    /// Engine mit eigener Identitäts-Policy und Standard-Optionen.
    pub fn with_resolver(resolver: R) -> Self {
        Self::with_options(resolver, DndOptions::default())
    }

    /// Engine mit eigener Identitäts-Policy und eigenen Optionen.
    pub fn with_options(resolver: R, options: DndOptions) -> Self {
        Self {
            state: DndState::new(resolver, options),
            controller: DndController::new(),
            state_maps: Publisher::new(),
            selections: Publisher::new(),
            drag_renderer: Box::new(NoDragUi),
            published_revision: 0,
            published_selection_revision: 0,
            disposed: false,
        }
    }

    /// Setzt den Zeichen-Kollaborator für die Drag-Vorschau.
    pub fn with_drag_renderer(mut self, renderer: impl DragRenderer<T> + 'static) -> Self {
        self.set_drag_renderer(renderer);
        self
    }

    /// Ersetzt den Zeichen-Kollaborator für die Drag-Vorschau.
    pub fn set_drag_renderer(&mut self, renderer: impl DragRenderer<T> + 'static) {
        self.drag_renderer = Box::new(renderer);
    }

    // === Eingänge ===

    /// Verarbeitet einen Intent. Nach jedem ausgeführten Command werden
    /// Änderungen sofort veröffentlicht, auch wenn ein späterer fehlschlägt.
    ///
    /// Eine verworfene Engine ignoriert alle Intents.
    pub fn handle_intent(&mut self, intent: DndIntent<T>) -> DndResult<()> {
        if self.disposed {
            log::warn!("Engine ist bereits verworfen, Intent wird ignoriert");
            return Ok(());
        }
        let commands = self.controller.map_intent_to_commands(&self.state, intent)?;
        for command in commands {
            let result = self.controller.handle_command(&mut self.state, command);
            self.flush();
            result?;
        }
        Ok(())
    }

    /// Verarbeitet mehrere Intents nacheinander und bricht beim ersten Fehler ab.
    pub fn handle_intents(&mut self, intents: impl IntoIterator<Item = DndIntent<T>>) -> DndResult<()> {
        for intent in intents {
            self.handle_intent(intent)?;
        }
        Ok(())
    }

    /// Ersetzt die Registry durch die aktuell gerenderten Items.
    ///
    /// Items ohne Schlüssel werden übersprungen, der erste solche Fehler wird
    /// zurückgegeben.
    pub fn set_registry(&mut self, items: impl IntoIterator<Item = T>) -> DndResult<()> {
        self.handle_intent(DndIntent::RegistryChanged {
            items: items.into_iter().collect(),
        })
    }

    /// Selektiert ein Item (Bereichsselektion bei aktivem Shift und Anker).
    pub fn select(&mut self, item: T) -> DndResult<()> {
        self.handle_intent(DndIntent::SelectRequested { item })
    }

    /// Entfernt ein Item aus der Selektion. Fehler, wenn es nicht selektiert war.
    pub fn deselect(&mut self, item: T) -> DndResult<()> {
        self.handle_intent(DndIntent::DeselectRequested { item })
    }

    /// Selektiert ein unselektiertes Item bzw. deselektiert ein selektiertes.
    pub fn toggle(&mut self, item: T) -> DndResult<()> {
        self.handle_intent(DndIntent::ToggleRequested { item })
    }

    /// Selektiert alle registrierten Items in Registry-Reihenfolge.
    pub fn select_all(&mut self) {
        self.handle_infallible(DndIntent::SelectAllRequested);
    }

    /// Hebt die Selektion auf und entfernt den Anker.
    pub fn deselect_all(&mut self) {
        self.handle_infallible(DndIntent::ClearSelectionRequested);
    }

    /// Setzt das gehoverte Item (Pointer betritt das Item).
    pub fn hover(&mut self, item: T) -> DndResult<()> {
        self.handle_intent(DndIntent::PointerEntered { item })
    }

    /// Setzt den Hover zurück (Pointer verlässt das Item).
    pub fn reset_hover(&mut self) {
        self.handle_infallible(DndIntent::PointerLeft);
    }

    /// Setzt den Shift-Modifier.
    pub fn set_shift_active(&mut self, active: bool) {
        self.handle_infallible(DndIntent::ShiftChanged { active });
    }

    /// Startet bzw. beendet den Drag. Der Zeichen-Kollaborator wird nur bei Übergängen aufgerufen.
    pub fn set_dragging(&mut self, active: bool) {
        let intent = if active {
            DndIntent::DragStarted
        } else {
            DndIntent::DragEnded
        };
        self.handle_infallible(intent);
    }

    fn handle_infallible(&mut self, intent: DndIntent<T>) {
        if let Err(err) = self.handle_intent(intent) {
            log::error!("Unerwarteter Fehler bei schlüsselloser Operation: {err}");
        }
    }

    // === Abfragen ===

    /// Aktuelle State-Map (O(1)-Clone).
    pub fn state_map(&self) -> SharedStateMap<T, R> {
        self.state.state_map()
    }

    /// Aktueller Snapshot der Selektion.
    pub fn selected_items(&self) -> SelectedItems<KeyOf<T, R>, T> {
        self.state.selection.snapshot()
    }

    /// Abgeleiteter Zustand eines Items; neutral, falls nicht registriert.
    pub fn item_state(&self, item: &T) -> DndResult<ItemState> {
        let key = self.state.resolve(item)?;
        Ok(self.state.state_map().state_of(&key))
    }

    /// Selektionsstatus eines Items, unabhängig von der Registry.
    pub fn is_selected(&self, item: &T) -> DndResult<bool> {
        let key = self.state.resolve(item)?;
        Ok(self.state.selection.contains(&key))
    }

    /// Löst den Schlüssel eines Items mit der Identitäts-Policy der Engine auf.
    pub fn resolve(&self, item: &T) -> DndResult<KeyOf<T, R>> {
        self.state.resolve(item)
    }

    /// Gibt die aktuellen Interaktions-Signale zurück.
    pub fn signals(&self) -> &InteractionSignals<KeyOf<T, R>, T> {
        &self.state.signals
    }

    /// Gibt die Laufzeit-Optionen zurück.
    pub fn options(&self) -> &DndOptions {
        &self.state.options
    }

    /// Gibt das Command-Log zurück.
    pub fn command_log(&self) -> &CommandLog {
        &self.state.command_log
    }

    /// Read-only Zugriff auf den vollständigen Engine-State.
    pub fn state(&self) -> &DndState<T, R> {
        &self.state
    }

    // === Subscriptions ===

    /// Meldet einen Callback für jede neue State-Map an.
    /// Der aktuelle Stand wird sofort geliefert.
    pub fn subscribe(
        &self,
        mut callback: impl FnMut(&SharedStateMap<T, R>) + 'static,
    ) -> Subscription {
        if !self.disposed {
            callback(&self.state.state_map());
        }
        self.state_maps.subscribe(callback)
    }

    /// Meldet einen Callback für jeden neuen Selektions-Snapshot an.
    /// Der aktuelle Stand wird sofort geliefert.
    pub fn subscribe_selection(
        &self,
        mut callback: impl FnMut(&SelectedItems<KeyOf<T, R>, T>) + 'static,
    ) -> Subscription {
        if !self.disposed {
            callback(&self.state.selection.snapshot());
        }
        self.selections.subscribe(callback)
    }

    /// Meldet einen Callback für den Zustand eines einzelnen Items an.
    ///
    /// Geliefert wird sofort und danach nur bei Änderung des Zustands.
    pub fn subscribe_item(
        &self,
        item: &T,
        mut callback: impl FnMut(ItemState) + 'static,
    ) -> DndResult<Subscription> {
        let key = self.state.resolve(item)?;
        let mut last = self.state.state_map().state_of(&key);
        if !self.disposed {
            callback(last);
        }

        Ok(self.state_maps.subscribe(move |map: &SharedStateMap<T, R>| {
            let next = map.state_of(&key);
            if next != last {
                last = next;
                callback(next);
            }
        }))
    }

    /// Live-Sicht auf den abgeleiteten Zustand eines Items.
    pub fn watch_item(&self, item: &T) -> DndResult<ItemWatch<KeyOf<T, R>>> {
        let key = self.state.resolve(item)?;
        let cell = Rc::new(Cell::new(self.state.state_map().state_of(&key)));

        let subscription = {
            let cell = Rc::clone(&cell);
            let key = key.clone();
            self.state_maps
                .subscribe(move |map: &SharedStateMap<T, R>| cell.set(map.state_of(&key)))
        };
        Ok(ItemWatch::new(key, cell, subscription))
    }

    /// Live-Sicht darauf, ob ein Item selektiert ist.
    pub fn watch_selected(&self, item: &T) -> DndResult<SelectedWatch<KeyOf<T, R>>> {
        let key = self.state.resolve(item)?;
        let cell = Rc::new(Cell::new(self.state.selection.contains(&key)));

        let subscription = {
            let cell = Rc::clone(&cell);
            let key = key.clone();
            self.selections
                .subscribe(move |selected: &SelectedItems<KeyOf<T, R>, T>| {
                    cell.set(selected.contains_key(&key))
                })
        };
        Ok(SelectedWatch::new(key, cell, subscription))
    }

    /// Anzahl aktiver Subscriber (State-Map, Selektion).
    pub fn subscriber_counts(&self) -> (usize, usize) {
        (
            self.state_maps.subscriber_count(),
            self.selections.subscriber_count(),
        )
    }

    /// Beendet die Engine: blendet eine aktive Drag-Vorschau aus und
    /// entfernt alle Subscriber. Danach werden weder Intents noch neue
    /// Subscriber angenommen. Mehrfacher Aufruf ist wirkungslos.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if self.state.signals.set_dragging(false) {
            self.state.mark_changed();
            self.state.refresh();
            log::debug!("Engine verworfen während Drag, Drag-UI wird ausgeblendet");
            self.drag_renderer.hide_drag_ui();
        }
        self.state.take_drag_ui_requests();
        self.state_maps.close();
        self.selections.close();
    }

    /// Gibt `true` zurück, wenn die Engine bereits verworfen wurde.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Veröffentlicht geänderte Snapshots und leitet Drag-UI-Aufträge weiter.
    fn flush(&mut self) {
        if self.published_revision != self.state.revision() {
            self.published_revision = self.state.revision();
            self.state_maps.publish(&self.state.state_map());
        }

        if self.published_selection_revision != self.state.selection_revision() {
            self.published_selection_revision = self.state.selection_revision();
            self.selections.publish(&self.state.selection.snapshot());
        }

        for request in self.state.take_drag_ui_requests() {
            request.dispatch(self.drag_renderer.as_mut());
        }
    }
}

impl<T, R> Drop for DndEngine<T, R>
where
    T: Clone + 'static,
    R: IdentityResolver<T>,
    KeyOf<T, R>: 'static,
{
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        id: u64,
    }

    impl Identifiable for Node {
        type Id = u64;

        fn id(&self) -> u64 {
            self.id
        }
    }

    fn nodes(count: u64) -> Vec<Node> {
        (0..count).map(|id| Node { id }).collect()
    }

    #[test]
    fn subscribers_get_current_map_immediately_and_on_change() {
        let mut engine = DndEngine::new();
        engine.set_registry(nodes(3)).expect("Registry sollte gelingen");

        let sizes = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let sizes = Rc::clone(&sizes);
            engine.subscribe(move |map| sizes.borrow_mut().push(map.len()))
        };
        engine.set_registry(nodes(5)).expect("Registry sollte gelingen");

        assert_eq!(*sizes.borrow(), vec![3, 5]);
    }

    #[test]
    fn unchanged_signals_publish_nothing() {
        let mut engine = DndEngine::new();
        engine.set_registry(nodes(2)).expect("Registry sollte gelingen");

        let calls = Rc::new(Cell::new(0));
        let _subscription = {
            let calls = Rc::clone(&calls);
            engine.subscribe(move |_| calls.set(calls.get() + 1))
        };
        engine.set_shift_active(false);
        engine.reset_hover();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscribe_item_reports_only_changes() {
        let mut engine = DndEngine::new();
        engine.set_registry(nodes(3)).expect("Registry sollte gelingen");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            engine
                .subscribe_item(&Node { id: 1 }, move |state| {
                    seen.borrow_mut().push(state.is_selected)
                })
                .expect("Node hat immer einen Schlüssel")
        };

        engine.select(Node { id: 0 }).expect("Selektion sollte gelingen");
        engine.select(Node { id: 1 }).expect("Selektion sollte gelingen");

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn selection_publisher_delivers_snapshots() {
        let mut engine = DndEngine::new();
        engine.set_registry(nodes(3)).expect("Registry sollte gelingen");

        let lens = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let lens = Rc::clone(&lens);
            engine.subscribe_selection(move |selected| lens.borrow_mut().push(selected.len()))
        };
        engine.select(Node { id: 2 }).expect("Selektion sollte gelingen");
        engine.hover(Node { id: 0 }).expect("Hover sollte gelingen");
        engine.deselect_all();

        assert_eq!(*lens.borrow(), vec![0, 1, 0]);
    }

    #[test]
    fn dispose_clears_subscribers() {
        let mut engine: DndEngine<Node> = DndEngine::new();
        let _a = engine.subscribe(|_| {});
        let _b = engine.subscribe_selection(|_| {});
        assert_eq!(engine.subscriber_counts(), (1, 1));

        engine.dispose();
        assert_eq!(engine.subscriber_counts(), (0, 0));
    }

    #[test]
    fn disposed_engine_ignores_intents_and_subscribers() {
        let mut engine = DndEngine::new();
        engine.set_registry(nodes(2)).expect("Registry sollte gelingen");
        engine.dispose();
        assert!(engine.is_disposed());

        engine.select(Node { id: 0 }).expect("Verworfene Engine meldet keinen Fehler");
        assert!(engine.selected_items().is_empty());

        let calls = Rc::new(Cell::new(0));
        let _subscription = {
            let calls = Rc::clone(&calls);
            engine.subscribe(move |_| calls.set(calls.get() + 1))
        };
        let watch = engine.watch_item(&Node { id: 1 }).expect("Watch sollte gelingen");

        assert_eq!(calls.get(), 0);
        assert_eq!(engine.subscriber_counts(), (0, 0));
        assert_eq!(watch.get(), ItemState::default());
    }
}
