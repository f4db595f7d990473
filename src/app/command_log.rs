//! Begrenztes Command-Log für Diagnose und Tests.

use std::fmt;

/// Speichert ausgeführte Commands (als Debug-Text) in Reihenfolge.
pub struct CommandLog {
    entries: Vec<String>,
    max_entries: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    const DEFAULT_MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log mit Standardkapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Erstellt ein leeres Command-Log mit eigener Obergrenze (mindestens 2).
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(2),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf `max_entries`, die ältere Hälfte wird verworfen.
    pub fn record(&mut self, command: &impl fmt::Debug) {
        if self.entries.len() >= self.max_entries {
            self.entries.drain(..self.max_entries / 2);
        }
        self.entries.push(format!("{command:?}"));
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Letzter geloggter Command.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_older_half_when_full() {
        let mut log = CommandLog::with_capacity(4);
        for i in 0..5 {
            log.record(&i);
        }
        assert_eq!(log.entries(), &["2", "3", "4"]);
        assert_eq!(log.last(), Some("4"));
    }
}
