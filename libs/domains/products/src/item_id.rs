use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};

const PREFIX: &str = "ITM-";

/// Display identifier of a product, e.g. `ITM-07`.
///
/// Derived from the product's sequence position at creation time and never
/// changed afterwards. Distinct from the storage `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "ITM-01")]
pub struct ItemId(String);

impl ItemId {
    /// Render a 1-based sequence position as `ITM-NN`.
    ///
    /// The number is zero padded to two digits and widens past 99.
    pub fn from_sequence(position: u64) -> ProductResult<Self> {
        if position == 0 {
            return Err(ProductError::InvalidSequence(position));
        }
        Ok(Self(format!("{PREFIX}{position:02}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_two_digits() {
        assert_eq!(ItemId::from_sequence(1).unwrap(), "ITM-01");
        assert_eq!(ItemId::from_sequence(9).unwrap(), "ITM-09");
        assert_eq!(ItemId::from_sequence(42).unwrap(), "ITM-42");
    }

    #[test]
    fn test_widens_past_ninety_nine() {
        assert_eq!(ItemId::from_sequence(99).unwrap(), "ITM-99");
        assert_eq!(ItemId::from_sequence(100).unwrap(), "ITM-100");
        assert_eq!(ItemId::from_sequence(12345).unwrap(), "ITM-12345");
    }

    #[test]
    fn test_zero_is_rejected() {
        let err = ItemId::from_sequence(0).unwrap_err();
        assert!(matches!(err, ProductError::InvalidSequence(0)));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ItemId::from_sequence(3).unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("ITM-03"));
        assert_eq!(id.to_string(), "ITM-03");
    }
}
