//! Schnittstelle zum externen Zeichen-Kollaborator für die Drag-Vorschau.

/// Rendert die gezogenen Items (Drag-Ghost) außerhalb der Engine.
///
/// Wird genau bei Übergängen des Drag-Zustands aufgerufen.
pub trait DragRenderer<T> {
    /// Drag hat begonnen: alle aktuell selektierten Items darstellen.
    fn show_drag_ui(&mut self, items: &[T]);

    /// Drag ist beendet: Darstellung entfernen.
    fn hide_drag_ui(&mut self);
}

/// Renderer ohne Darstellung (Standard, wenn der Host keinen setzt).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDragUi;

impl<T> DragRenderer<T> for NoDragUi {
    fn show_drag_ui(&mut self, _items: &[T]) {}

    fn hide_drag_ui(&mut self) {}
}

/// Ausstehender Auftrag an den Zeichen-Kollaborator.
///
/// Handler legen Aufträge im State ab, die Engine leitet sie nach der
/// Veröffentlichung der neuen State-Map weiter.
#[derive(Debug, Clone, PartialEq)]
pub enum DragUiRequest<T> {
    Show(Vec<T>),
    Hide,
}

impl<T> DragUiRequest<T> {
    pub(crate) fn dispatch(self, renderer: &mut dyn DragRenderer<T>) {
        match self {
            Self::Show(items) => {
                log::debug!("Drag-UI anzeigen für {} Items", items.len());
                renderer.show_drag_ui(&items);
            }
            Self::Hide => {
                log::debug!("Drag-UI ausblenden");
                renderer.hide_drag_ui();
            }
        }
    }
}
