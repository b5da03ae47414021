//! Raw per-page input (`FormState`) and its validated counterpart.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::field::{FieldValue, FormSchema, ValidationError};

/// Current raw values of one form, keyed by field name.
///
/// Always holds exactly the fields declared by its schema; unknown names are
/// ignored on write so the record sent over the wire can never lose a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    schema: &'static FormSchema,
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// Create a form holding every field's initial value.
    #[must_use]
    pub fn new(schema: &'static FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|spec| (spec.name, spec.initial.to_owned()))
            .collect();
        Self { schema, values }
    }

    #[must_use]
    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Raw value of `name`, or `""` for an undeclared field.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Overwrite one field. Returns `false` when `name` is not declared.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(spec) = self.schema.field(name) else {
            return false;
        };
        self.values.insert(spec.name, value.into());
        true
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    /// Iterate `(name, raw value)` pairs in schema order.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.schema
            .fields
            .iter()
            .map(|spec| (spec.name, self.get(spec.name)))
    }

    /// Parse every field against the schema.
    ///
    /// # Errors
    ///
    /// Returns one [`ValidationError`] per rejected field, in schema order.
    pub fn validate(&self) -> Result<ValidatedForm, Vec<ValidationError>> {
        let mut values = BTreeMap::new();
        let mut errors = Vec::new();
        for spec in self.schema.fields {
            match spec.parse(self.get(spec.name)) {
                Ok(value) => {
                    values.insert(spec.name, value);
                }
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(ValidatedForm { values })
        } else {
            Err(errors)
        }
    }
}

/// Typed field values produced by [`FormState::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedForm {
    values: BTreeMap<&'static str, FieldValue>,
}

impl ValidatedForm {
    /// Text value of a text-like field (text, email, choice, image).
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not text-valued.
    pub fn text(&self, field: &'static str) -> Result<String, ValidationError> {
        match self.values.get(field) {
            Some(FieldValue::Text(value)) => Ok(value.clone()),
            Some(_) => Err(ValidationError::WrongKind { field }),
            None => Err(ValidationError::Missing { field }),
        }
    }

    /// Value of a float field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a float.
    pub fn float(&self, field: &'static str) -> Result<f64, ValidationError> {
        match self.values.get(field) {
            Some(FieldValue::Float(value)) => Ok(*value),
            Some(_) => Err(ValidationError::WrongKind { field }),
            None => Err(ValidationError::Missing { field }),
        }
    }

    /// Value of an integer field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not an integer.
    pub fn int(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self.values.get(field) {
            Some(FieldValue::Int(value)) => Ok(*value),
            Some(_) => Err(ValidationError::WrongKind { field }),
            None => Err(ValidationError::Missing { field }),
        }
    }
}
