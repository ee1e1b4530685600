//! Value objects shared across the domain layer.

use serde::{Deserialize, Deserializer};

/// A merge-patch field: either keep the stored value or set a new one.
///
/// Deserializes from JSON so that an absent field (or an explicit `null`)
/// becomes [`Patch::Keep`] and any other value becomes [`Patch::Set`].
/// Carrying the distinction as a dedicated type rather than a bare `Option`
/// keeps room for an explicit "clear" variant later without changing callers.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Patch<T> {
    /// Leave the current value untouched.
    #[default]
    Keep,
    /// Replace the current value.
    Set(T),
}

impl<T> Patch<T> {
    /// Returns the patched value, falling back to `current` when kept.
    pub fn unwrap_or(self, current: T) -> T {
        match self {
            Patch::Keep => current,
            Patch::Set(value) => value,
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Patch::Keep => None,
            Patch::Set(value) => Some(value),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Keep,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        budget: Patch<f64>,
    }

    #[test]
    fn absent_fields_deserialize_to_keep() {
        let body: Body = serde_json::from_str(r#"{"name": "Summer"}"#).unwrap();
        assert_eq!(body.name, Patch::Set("Summer".to_string()));
        assert_eq!(body.budget, Patch::Keep);
    }

    #[test]
    fn null_fields_deserialize_to_keep() {
        let body: Body = serde_json::from_str(r#"{"name": null, "budget": 10.0}"#).unwrap();
        assert_eq!(body.name, Patch::Keep);
        assert_eq!(body.budget, Patch::Set(10.0));
    }

    #[test]
    fn unwrap_or_prefers_the_patched_value() {
        assert_eq!(Patch::Set(2).unwrap_or(1), 2);
        assert_eq!(Patch::<i32>::Keep.unwrap_or(1), 1);
    }
}
