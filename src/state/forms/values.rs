//! Raw form values keyed by field

use crate::validation::FieldId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to raw (masked) string value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<FieldId, String>);

impl FormValues {
    /// Value of `field`, empty when never set
    pub fn get(&self, field: FieldId) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Copy of the values with `field` removed
    pub fn without(&self, field: FieldId) -> Self {
        let mut values = self.clone();
        values.0.remove(&field);
        values
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let values = FormValues::default();
        assert_eq!(values.get(FieldId::Email), "");
        assert!(!values.contains(FieldId::Email));
    }

    #[test]
    fn test_without_drops_only_that_field() {
        let mut values = FormValues::default();
        values.set(FieldId::Email, "a@b.co");
        values.set(FieldId::Password, "Abcdefg1!");

        let redacted = values.without(FieldId::Password);
        assert!(!redacted.contains(FieldId::Password));
        assert_eq!(redacted.get(FieldId::Email), "a@b.co");
        assert!(values.contains(FieldId::Password));
    }

    #[test]
    fn test_serializes_as_object_with_field_keys() {
        let mut values = FormValues::default();
        values.set(FieldId::PostalCode, "01310-100");
        values.set(FieldId::Name, "Ana");

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ana", "postalCode": "01310-100" })
        );
    }
}
