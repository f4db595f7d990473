/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Items werden hier noch unaufgelöst transportiert; die Schlüsselauflösung
/// passiert beim Mapping auf Commands.
#[derive(Debug, Clone)]
pub enum DndIntent<T> {
    /// Die gerenderte Item-Menge hat sich geändert (Mount/Unmount)
    RegistryChanged { items: Vec<T> },
    /// Item selektieren (Klick, ggf. mit gehaltener Shift-Taste)
    SelectRequested { item: T },
    /// Item aus der Selektion entfernen
    DeselectRequested { item: T },
    /// Klick auf ein Item: selektieren oder deselektieren
    ToggleRequested { item: T },
    /// Alle registrierten Items selektieren
    SelectAllRequested,
    /// Selektion aufheben (z.B. Escape)
    ClearSelectionRequested,
    /// Pointer betritt ein Item
    PointerEntered { item: T },
    /// Pointer verlässt ein Item
    PointerLeft,
    /// Shift-Modifier gedrückt oder losgelassen
    ShiftChanged { active: bool },
    /// Drag-Lifecycle hat begonnen
    DragStarted,
    /// Drag-Lifecycle ist beendet (Drop oder Abbruch)
    DragEnded,
}
