//! Three-state field wrapper for partial updates.
//!
//! A JSON body such as `{"phone": null}` must clear the phone while
//! `{}` must leave it alone. `Option<Option<T>>` loses that distinction
//! once serde fills in defaults, so patch payloads use [`Patch`] with
//! `#[serde(default)]` on the containing struct: a missing key stays
//! [`Patch::Absent`], an explicit `null` becomes [`Patch::Null`].

use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Deserializer};

use crate::errors::ModelError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }

    /// Write into a NOT NULL column. `Null` is rejected with the field name.
    pub fn apply_required(self, field: &'static str, target: &mut ActiveValue<T>) -> Result<(), ModelError>
    where
        T: Into<Value>,
    {
        match self {
            Patch::Absent => Ok(()),
            Patch::Null => Err(ModelError::RequiredField(field)),
            Patch::Value(v) => {
                *target = ActiveValue::Set(v);
                Ok(())
            }
        }
    }

    /// Write into a nullable column; `Null` clears it.
    pub fn apply_nullable(self, target: &mut ActiveValue<Option<T>>)
    where
        Option<T>: Into<Value>,
    {
        match self {
            Patch::Absent => {}
            Patch::Null => *target = ActiveValue::Set(None),
            Patch::Value(v) => *target = ActiveValue::Set(Some(v)),
        }
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
        // Only reached when the key is present in the input.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Probe {
        name: Patch<String>,
        phone: Patch<String>,
        floor: Patch<i32>,
    }

    #[test]
    fn missing_null_and_value_are_distinct() {
        let probe: Probe = serde_json::from_str(r#"{"phone": null, "floor": 3}"#).unwrap();
        assert_eq!(probe.name, Patch::Absent);
        assert_eq!(probe.phone, Patch::Null);
        assert_eq!(probe.floor, Patch::Value(3));
    }

    #[test]
    fn empty_object_touches_nothing() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.name.is_absent() && probe.phone.is_absent() && probe.floor.is_absent());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(serde_json::from_str::<Probe>(r#"{"floor": "third"}"#).is_err());
    }

    #[test]
    fn required_field_rejects_null() {
        let mut target = ActiveValue::Unchanged("Cardiology".to_string());
        let err = Patch::<String>::Null.apply_required("name", &mut target).unwrap_err();
        assert_eq!(err, ModelError::RequiredField("name"));
        assert_eq!(target, ActiveValue::Unchanged("Cardiology".to_string()));
    }

    #[test]
    fn nullable_field_clears_on_null() {
        let mut target = ActiveValue::Unchanged(Some("+7 900".to_string()));
        Patch::<String>::Null.apply_nullable(&mut target);
        assert_eq!(target, ActiveValue::Set(None));

        let mut untouched = ActiveValue::Unchanged(Some(5));
        Patch::<i32>::Absent.apply_nullable(&mut untouched);
        assert_eq!(untouched, ActiveValue::Unchanged(Some(5)));
    }

    #[test]
    fn map_keeps_state() {
        assert_eq!(Patch::Value(2).map(|v| v * 10), Patch::Value(20));
        assert_eq!(Patch::<i32>::Null.map(|v| v * 10), Patch::Null);
    }
}
