//! Field schemas and per-field validation.
//!
//! DESIGN
//! ======
//! Each form is described once as a static [`FormSchema`]. The same table
//! drives input rendering in the web client (input type, bounds, options) and
//! the validation pass that runs before any request body is built, so the
//! browser constraints and the wire coercion cannot drift apart.
//!
//! Numeric parsing is locale-independent (`str::parse`) and rejects
//! non-finite values, so `NaN` can never reach the wire.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Input kind of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free single-line text.
    Text,
    /// Email address.
    Email,
    /// Free multi-line text.
    LongText,
    /// Finite floating point number.
    Float,
    /// Whole number with optional inclusive bounds.
    Int { min: Option<i64>, max: Option<i64> },
    /// One of a fixed set of options.
    Choice(&'static [&'static str]),
    /// Base64-encoded image picked from a file input.
    Image,
}

impl FieldKind {
    /// HTML `type` attribute for the input rendering this kind.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::LongText | Self::Choice(_) => "text",
            Self::Email => "email",
            Self::Float | Self::Int { .. } => "number",
            Self::Image => "file",
        }
    }
}

/// Declaration of one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also the key in [`crate::FormState`].
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Value a fresh or reset form starts with.
    pub initial: &'static str,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind,
            initial: "",
        }
    }

    #[must_use]
    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self { placeholder, ..self }
    }

    #[must_use]
    pub const fn initial(self, initial: &'static str) -> Self {
        Self { initial, ..self }
    }

    /// Parse a raw input string according to this field's kind.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing why `raw` is not acceptable.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, ValidationError> {
        let field = self.name;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field });
        }

        match self.kind {
            FieldKind::Text | FieldKind::LongText | FieldKind::Image => {
                Ok(FieldValue::Text(trimmed.to_owned()))
            }
            FieldKind::Email => parse_email(field, trimmed),
            FieldKind::Float => parse_float(field, trimmed).map(FieldValue::Float),
            FieldKind::Int { min, max } => parse_int(field, trimmed, min, max).map(FieldValue::Int),
            FieldKind::Choice(options) => {
                if options.contains(&trimmed) {
                    Ok(FieldValue::Text(trimmed.to_owned()))
                } else {
                    Err(ValidationError::UnknownChoice {
                        field,
                        raw: trimmed.to_owned(),
                        options,
                    })
                }
            }
        }
    }
}

/// All fields of one form, in display order.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    /// Stable identifier, e.g. `"crop_yield"`.
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

/// A field value after successful parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Int(i64),
}

/// Reason a single field was rejected before submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number, got `{raw}`")]
    NotANumber { field: &'static str, raw: String },
    #[error("{field} must be a whole number, got `{raw}`")]
    NotAnInteger { field: &'static str, raw: String },
    #[error("{field} must be at least {min}, got {value}")]
    BelowMin { field: &'static str, value: i64, min: i64 },
    #[error("{field} must be at most {max}, got {value}")]
    AboveMax { field: &'static str, value: i64, max: i64 },
    #[error("{field} must be one of {}, got `{raw}`", .options.join(", "))]
    UnknownChoice {
        field: &'static str,
        raw: String,
        options: &'static [&'static str],
    },
    #[error("{field} must be a valid email address, got `{raw}`")]
    InvalidEmail { field: &'static str, raw: String },
    /// The field is declared but holds a value of another kind.
    #[error("{field} has an unexpected value type")]
    WrongKind { field: &'static str },
}

impl ValidationError {
    /// Name of the field the error belongs to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::BelowMin { field, .. }
            | Self::AboveMax { field, .. }
            | Self::UnknownChoice { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::WrongKind { field } => field,
        }
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field,
            raw: raw.to_owned(),
        }),
    }
}

fn parse_int(
    field: &'static str,
    raw: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<i64, ValidationError> {
    let value = match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) if parse_float(field, raw).is_ok() => {
            return Err(ValidationError::NotAnInteger {
                field,
                raw: raw.to_owned(),
            });
        }
        Err(_) => {
            return Err(ValidationError::NotANumber {
                field,
                raw: raw.to_owned(),
            });
        }
    };

    if let Some(min) = min {
        if value < min {
            return Err(ValidationError::BelowMin { field, value, min });
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::AboveMax { field, value, max });
        }
    }
    Ok(value)
}

fn parse_email(field: &'static str, raw: &str) -> Result<FieldValue, ValidationError> {
    let valid = raw.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.is_empty()
            && !domain.contains('@')
            && !raw.chars().any(char::is_whitespace)
    });
    if valid {
        Ok(FieldValue::Text(raw.to_owned()))
    } else {
        Err(ValidationError::InvalidEmail {
            field,
            raw: raw.to_owned(),
        })
    }
}
