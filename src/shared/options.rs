//! Zentrale Konfiguration der Selektions-Engine.
//!
//! `DndOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── CSS-Klassen ─────────────────────────────────────────────────────

/// Klasse für selektierte Items.
pub const CSS_CLASS_SELECTED: &str = "knd-selected";
/// Klasse für Items im ausstehenden Shift-Bereich.
pub const CSS_CLASS_SHIFT_HOVERED: &str = "knd-shift-hovered";
/// Klasse für Items, die gerade gezogen werden.
pub const CSS_CLASS_DRAGGING: &str = "knd-dragging";

// ── Diagnose ────────────────────────────────────────────────────────

/// Maximale Anzahl Einträge im Command-Log.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

/// Klassennamen für die visuelle Bindung (rein präsentational).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssClassOptions {
    pub selected: String,
    pub shift_hovered: String,
    pub dragging: String,
}

impl Default for CssClassOptions {
    fn default() -> Self {
        Self {
            selected: CSS_CLASS_SELECTED.to_owned(),
            shift_hovered: CSS_CLASS_SHIFT_HOVERED.to_owned(),
            dragging: CSS_CLASS_DRAGGING.to_owned(),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `knd_dnd.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndOptions {
    /// Klassennamen für selektierte/gehoverte/gezogene Items
    pub css: CssClassOptions,
    /// Escape hebt die Selektion auf
    pub escape_clears_selection: bool,
    /// Obergrenze des Command-Logs
    pub command_log_capacity: usize,
}

impl Default for DndOptions {
    fn default() -> Self {
        Self {
            css: CssClassOptions::default(),
            escape_clears_selection: true,
            command_log_capacity: COMMAND_LOG_CAPACITY,
        }
    }
}

impl DndOptions {
    /// Parst Optionen aus einem TOML-String. Fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Lädt Optionen aus einer TOML-Datei, fällt bei Fehlern auf Standardwerte zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("knd_dnd"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("knd_dnd.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let opts = DndOptions::from_toml_str(
            r#"
            escape_clears_selection = false

            [css]
            selected = "is-picked"
            "#,
        )
        .expect("TOML sollte parsebar sein");

        assert!(!opts.escape_clears_selection);
        assert_eq!(opts.css.selected, "is-picked");
        assert_eq!(opts.css.shift_hovered, CSS_CLASS_SHIFT_HOVERED);
        assert_eq!(opts.command_log_capacity, COMMAND_LOG_CAPACITY);
    }

    #[test]
    fn save_and_load_roundtrip_through_file() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("knd_dnd.toml");

        let mut opts = DndOptions::default();
        opts.css.dragging = "ghost".into();
        opts.save_to_file(&path).expect("Speichern sollte gelingen");

        assert_eq!(DndOptions::load_from_file(&path), opts);
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let missing = dir.path().join("fehlt.toml");
        assert_eq!(DndOptions::load_from_file(&missing), DndOptions::default());

        let broken = dir.path().join("kaputt.toml");
        std::fs::write(&broken, "escape_clears_selection = 42").expect("Schreiben");
        assert_eq!(DndOptions::load_from_file(&broken), DndOptions::default());
    }

    #[test]
    fn config_path_points_to_toml_next_to_executable() {
        let path = DndOptions::config_path();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("knd_dnd.toml")
        );
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf));
        assert_eq!(path.parent().map(std::path::Path::to_path_buf), exe_dir);
    }
}
