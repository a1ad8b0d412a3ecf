use serde::Serialize;

/// A looked-up value together with whether it came from a fallback.
///
/// Title overrides and translations never fail; they degrade to the English
/// entry or to a synthesized value. `used_fallback` lets callers and tests see
/// that this happened without reading logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub used_fallback: bool,
}

impl<T> Resolved<T> {
    /// Value found where it was asked for.
    pub fn direct(value: T) -> Self {
        Self {
            value,
            used_fallback: false,
        }
    }

    /// Value produced by a fallback step.
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            used_fallback: true,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            used_fallback: self.used_fallback,
        }
    }
}
