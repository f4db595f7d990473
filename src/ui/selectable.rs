//! Visuelle Bindung eines einzelnen Items an eine Engine.
//!
//! Der Host rendert ein Item, hält dazu ein `Selectable` und wendet
//! `css_classes()` an. Pointer-Hooks liefern Intents, die der Host an
//! `DndEngine::handle_intent` weitergibt.

use crate::app::{DndEngine, DndIntent, ItemWatch};
use crate::core::{DndResult, IdentityResolver};
use crate::shared::CssClassOptions;

/// Per-Item-Bindung: Zustand lesen, Interaktionen als Intents auslösen.
#[derive(Debug)]
pub struct Selectable<T, K> {
    item: T,
    watch: ItemWatch<K>,
    css: CssClassOptions,
}

impl<T: Clone, K> Selectable<T, K> {
    /// Bindet ein Item an die Engine. Schlägt nur fehl, wenn das Item
    /// keinen Schlüssel hat.
    pub fn bind<R>(engine: &DndEngine<T, R>, item: T) -> DndResult<Self>
    where
        T: 'static,
        K: 'static,
        R: IdentityResolver<T, Key = K>,
    {
        let watch = engine.watch_item(&item)?;
        Ok(Self {
            item,
            watch,
            css: engine.options().css.clone(),
        })
    }

    /// Gebundenes Item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Aufgelöster Schlüssel des Items.
    pub fn key(&self) -> &K {
        self.watch.key()
    }

    /// Gibt `true` zurück, wenn das Item selektiert ist.
    pub fn is_selected(&self) -> bool {
        self.watch.is_selected()
    }

    /// Gibt `true` zurück, wenn das Item im ausstehenden Shift-Bereich liegt.
    pub fn is_shift_hovered(&self) -> bool {
        self.watch.is_shift_hovered()
    }

    /// Gibt `true` zurück, wenn das Item gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.watch.is_dragging()
    }

    /// Aktive Klassen in fester Reihenfolge (selektiert, Shift-Bereich, Drag).
    pub fn css_classes(&self) -> Vec<&str> {
        let state = self.watch.get();
        let mut classes = Vec::with_capacity(3);
        if state.is_selected {
            classes.push(self.css.selected.as_str());
        }
        if state.is_shift_hovered {
            classes.push(self.css.shift_hovered.as_str());
        }
        if state.is_dragging {
            classes.push(self.css.dragging.as_str());
        }
        classes
    }

    /// Pointer betritt das Item.
    pub fn on_enter(&self) -> DndIntent<T> {
        DndIntent::PointerEntered {
            item: self.item.clone(),
        }
    }

    /// Pointer verlässt das Item.
    pub fn on_leave(&self) -> DndIntent<T> {
        DndIntent::PointerLeft
    }

    /// Klick: selektiert oder deselektiert.
    pub fn on_click(&self) -> DndIntent<T> {
        DndIntent::ToggleRequested {
            item: self.item.clone(),
        }
    }

    /// Item selektieren (Bereichsselektion bei gehaltener Shift-Taste).
    pub fn select(&self) -> DndIntent<T> {
        DndIntent::SelectRequested {
            item: self.item.clone(),
        }
    }

    /// Item aus der Selektion entfernen.
    pub fn deselect(&self) -> DndIntent<T> {
        DndIntent::DeselectRequested {
            item: self.item.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Identifiable;

    #[derive(Debug, Clone, PartialEq)]
    struct Photo {
        id: u16,
    }

    impl Identifiable for Photo {
        type Id = u16;

        fn id(&self) -> u16 {
            self.id
        }
    }

    fn engine_with_photos(count: u16) -> DndEngine<Photo> {
        let mut engine = DndEngine::new();
        engine
            .set_registry((0..count).map(|id| Photo { id }))
            .expect("Registry sollte gelingen");
        engine
    }

    #[test]
    fn classes_follow_engine_state() {
        let mut engine = engine_with_photos(3);
        let binding = Selectable::bind(&engine, Photo { id: 1 }).expect("Bindung sollte gelingen");
        assert!(binding.css_classes().is_empty());

        engine.handle_intent(binding.on_click()).expect("Klick sollte gelingen");
        assert_eq!(binding.css_classes(), vec!["knd-selected"]);

        engine.set_dragging(true);
        assert_eq!(binding.css_classes(), vec!["knd-selected", "knd-dragging"]);
        engine.set_dragging(false);

        engine.handle_intent(binding.on_click()).expect("Klick sollte gelingen");
        assert!(!binding.is_selected());
    }

    #[test]
    fn pointer_hooks_mark_shift_range() {
        let mut engine = engine_with_photos(4);
        let first = Selectable::bind(&engine, Photo { id: 0 }).expect("Bindung");
        let middle = Selectable::bind(&engine, Photo { id: 1 }).expect("Bindung");
        let last = Selectable::bind(&engine, Photo { id: 2 }).expect("Bindung");

        engine.handle_intent(first.select()).expect("Selektion sollte gelingen");
        engine.set_shift_active(true);
        engine.handle_intent(last.on_enter()).expect("Hover sollte gelingen");

        assert!(middle.is_shift_hovered());
        assert_eq!(middle.css_classes(), vec!["knd-shift-hovered"]);
        assert_eq!(first.css_classes(), vec!["knd-selected", "knd-shift-hovered"]);

        engine.handle_intent(last.on_leave()).expect("Leave sollte gelingen");
        assert!(!middle.is_shift_hovered());
    }

    #[test]
    fn custom_class_names_are_used() {
        let mut options = crate::shared::DndOptions::default();
        options.css.selected = "picked".into();
        let mut engine: DndEngine<Photo> = DndEngine::with_options(crate::core::ById, options);
        engine.set_registry([Photo { id: 9 }]).expect("Registry sollte gelingen");

        let binding = Selectable::bind(&engine, Photo { id: 9 }).expect("Bindung");
        engine.handle_intent(binding.select()).expect("Selektion sollte gelingen");
        assert_eq!(binding.css_classes(), vec!["picked"]);
    }
}
