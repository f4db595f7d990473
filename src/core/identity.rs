//! Identitätsauflösung: stabiler, eindeutiger Schlüssel pro Item.
//!
//! Standardmäßig liefert das Item seinen Schlüssel selbst über [`Identifiable`]
//! (Feld `id`). Alternativ kann eine Projektion injiziert werden, die für
//! einzelne Items auch fehlschlagen darf.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use super::error::IdentityResolutionError;

/// Typen, die einen stabilen Schlüssel zur Compile-Zeit garantieren.
pub trait Identifiable {
    /// Schlüsseltyp (z.B. `u64` oder `String`)
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// Liefert den Schlüssel des Items. Muss für die Lebensdauer des Items stabil sein.
    fn id(&self) -> Self::Id;
}

/// Löst den Schlüssel eines Items auf.
pub trait IdentityResolver<T> {
    /// Aufgelöster Schlüsseltyp
    type Key: Clone + Eq + Hash + fmt::Debug;

    /// Liefert den Schlüssel oder einen Fehler, wenn das Item keinen besitzt.
    fn resolve(&self, item: &T) -> Result<Self::Key, IdentityResolutionError>;
}

/// Standard-Policy: Schlüssel über [`Identifiable::id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ById;

impl<T: Identifiable> IdentityResolver<T> for ById {
    type Key = T::Id;

    #[inline]
    fn resolve(&self, item: &T) -> Result<Self::Key, IdentityResolutionError> {
        Ok(item.id())
    }
}

/// Benutzerdefinierte Projektion `&T -> Option<K>`.
///
/// `None` wird als [`IdentityResolutionError`] gemeldet statt unter einem
/// undefinierten Schlüssel weiterzuarbeiten.
pub struct Projection<F, K> {
    project: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> Projection<F, K> {
    /// Erstellt eine Projektion aus einer Funktion.
    pub fn new(project: F) -> Self {
        Self {
            project,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for Projection<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.project.clone())
    }
}

impl<F, K> fmt::Debug for Projection<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("key", &std::any::type_name::<K>())
            .finish()
    }
}

impl<T, K, F> IdentityResolver<T> for Projection<F, K>
where
    F: Fn(&T) -> Option<K>,
    K: Clone + Eq + Hash + fmt::Debug,
{
    type Key = K;

    fn resolve(&self, item: &T) -> Result<K, IdentityResolutionError> {
        (self.project)(item).ok_or_else(|| IdentityResolutionError::for_type::<T>())
    }
}
