use sea_orm::EntityTrait;
use serde::de::DeserializeOwned;

use crate::descriptor::EntityDescriptor;
use crate::errors::ModelError;

/// Reference values carried by a create or patch payload.
pub trait References {
    /// Target id written to `field`, or `None` when the payload leaves the
    /// field alone or clears it.
    fn reference(&self, _field: &str) -> Option<i32> {
        None
    }
}

/// A table exposed through the generic record operations.
pub trait Resource: EntityTrait {
    type Create: DeserializeOwned + References + Send + Sync + 'static;
    type Patch: DeserializeOwned + References + Default + Send + Sync + 'static;

    fn descriptor() -> &'static EntityDescriptor;

    /// Active model for an insert; `id` is left to storage.
    fn new_active_model(input: Self::Create) -> Result<Self::ActiveModel, ModelError>;

    /// Overwrite exactly the fields present in `patch`.
    fn apply_patch(patch: Self::Patch, model: &mut Self::ActiveModel) -> Result<(), ModelError>;

    fn record_id(model: &Self::Model) -> i32;
}

/// Monday is 1, Sunday is 7.
pub fn check_day_of_week(day: i32) -> Result<i32, ModelError> {
    if (1..=7).contains(&day) {
        Ok(day)
    } else {
        Err(ModelError::Validation(format!("day_of_week must be within 1..=7, got {day}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_of_week_bounds() {
        assert_eq!(check_day_of_week(1), Ok(1));
        assert_eq!(check_day_of_week(7), Ok(7));
        assert!(matches!(check_day_of_week(0), Err(ModelError::Validation(_))));
        assert!(matches!(check_day_of_week(8), Err(ModelError::Validation(_))));
    }
}
