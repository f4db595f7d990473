//! Fehlertypen der Selektions-Engine.
//!
//! Keiner dieser Fehler ist fatal: Jede Operation, die einen Fehler meldet,
//! lässt den Zustand der Engine unverändert und konsistent.

use thiserror::Error;

/// Ein Item liefert keinen Schlüssel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Item vom Typ `{item_type}` besitzt keinen eindeutigen Schlüssel")]
pub struct IdentityResolutionError {
    item_type: &'static str,
}

impl IdentityResolutionError {
    /// Erstellt den Fehler für den Item-Typ `T`.
    pub fn for_type<T>() -> Self {
        Self {
            item_type: std::any::type_name::<T>(),
        }
    }

    /// Name des Item-Typs, dessen Schlüssel fehlt.
    pub fn item_type(&self) -> &'static str {
        self.item_type
    }
}

/// Schweregrad einer gemeldeten Bedingung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Harmlos, nur protokolliert (z.B. doppelte Selektion)
    Warning,
    /// Ungültige Eingabe, Zustand bleibt unverändert
    Error,
}

/// Gemeldete Bedingungen der Engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DndError {
    /// Schlüssel konnte nicht aufgelöst werden
    #[error(transparent)]
    IdentityResolution(#[from] IdentityResolutionError),

    /// Item war bereits selektiert
    #[error("Item {key} ist bereits selektiert")]
    AlreadySelected { key: String },

    /// Item war nicht selektiert und kann nicht deselektiert werden
    #[error("Item {key} kann nicht deselektiert werden, da es nicht selektiert war")]
    NotSelected { key: String },
}

impl DndError {
    /// Schweregrad der Bedingung.
    pub fn severity(&self) -> Severity {
        match self {
            Self::AlreadySelected { .. } => Severity::Warning,
            Self::IdentityResolution(_) | Self::NotSelected { .. } => Severity::Error,
        }
    }

    /// `true`, wenn die Bedingung nur eine Warnung ist.
    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    pub(crate) fn already_selected(key: &impl std::fmt::Debug) -> Self {
        Self::AlreadySelected {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn not_selected(key: &impl std::fmt::Debug) -> Self {
        Self::NotSelected {
            key: format!("{key:?}"),
        }
    }
}

/// Result-Alias für Engine-Operationen
pub type DndResult<T> = Result<T, DndError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_selection_is_only_a_warning() {
        let err = DndError::already_selected(&3u32);
        assert!(err.is_warning());
        assert_eq!(err.to_string(), "Item 3 ist bereits selektiert");
    }

    #[test]
    fn invalid_deselection_and_identity_failure_are_errors() {
        assert_eq!(
            DndError::not_selected(&"x").severity(),
            Severity::Error
        );
        let err: DndError = IdentityResolutionError::for_type::<String>().into();
        assert_eq!(err.severity(), Severity::Error);
    }
}
