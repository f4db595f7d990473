//! Tastatur-Eingaben für eine Engine-Instanz.
//!
//! Der Host leitet seine Key-Events hierher; gemappt wird auf `DndIntent`s.
//! Es gibt keine globalen Listener: jede Engine bekommt nur die Events,
//! die ihr Host weiterreicht.

use crate::app::DndIntent;
use crate::shared::DndOptions;

/// Taste eines Key-Events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Shift,
    Escape,
    /// Druckbares Zeichen (z.B. `'a'`)
    Character(char),
    /// Sonstige benannte Taste (z.B. `"Tab"`)
    Named(String),
}

impl Key {
    /// Bildet einen Tastennamen (DOM-/winit-Stil) auf eine [`Key`] ab.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Shift" | "ShiftLeft" | "ShiftRight" => Self::Shift,
            "Escape" | "Esc" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Named(name.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// Key-Event inklusive Modifier-Zustand zum Zeitpunkt des Events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key: Key,
    /// Shift gehalten
    pub shift: bool,
    /// Ctrl (bzw. Cmd auf macOS) gehalten
    pub command: bool,
}

impl KeyEvent {
    /// Taste gedrückt. Bei `Key::Shift` gilt Shift als gehalten.
    pub fn down(key: Key) -> Self {
        Self {
            kind: KeyEventKind::Down,
            shift: key == Key::Shift,
            key,
            command: false,
        }
    }

    /// Taste losgelassen, ohne gehaltene Modifier.
    pub fn up(key: Key) -> Self {
        Self {
            kind: KeyEventKind::Up,
            key,
            shift: false,
            command: false,
        }
    }

    /// Setzt den Shift-Zustand des Events.
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Setzt den Ctrl/Cmd-Zustand des Events.
    pub fn with_command(mut self, command: bool) -> Self {
        self.command = command;
        self
    }
}

/// Verarbeitet ein Key-Event und gibt die resultierenden Intents zurück.
pub fn collect_key_intents<T>(event: &KeyEvent, options: &DndOptions) -> Vec<DndIntent<T>> {
    let mut events = Vec::new();

    match event.kind {
        KeyEventKind::Down => {
            if event.shift {
                events.push(DndIntent::ShiftChanged { active: true });
            }

            if event.key == Key::Escape && options.escape_clears_selection {
                events.push(DndIntent::ClearSelectionRequested);
            }

            // Ctrl+A / Cmd+A
            if event.command && matches!(event.key, Key::Character('a' | 'A')) {
                events.push(DndIntent::SelectAllRequested);
            }
        }
        KeyEventKind::Up => {
            if !event.shift {
                events.push(DndIntent::ShiftChanged { active: false });
            }
        }
    }

    events
}
