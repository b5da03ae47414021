//! HTML input attributes derived from a field schema.
//!
//! The browser checks `min`/`max`/`step` before submit fires; the same
//! bounds are enforced again by `forms` validation.

#[cfg(test)]
#[path = "field_view_test.rs"]
mod field_view_test;

use forms::{FieldKind, FieldSpec};

/// How one field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Input,
    TextArea,
    Select(&'static [&'static str]),
    /// Handled by the page itself (file picker).
    Custom,
}

/// Attributes of an `<input>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputAttrs {
    pub input_type: &'static str,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<&'static str>,
}

/// One `<option>` of a select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
    pub disabled: bool,
}

/// Label of the empty leading option when the schema gives no placeholder.
pub const DEFAULT_SELECT_PROMPT: &str = "Select an option";

#[must_use]
pub fn control(spec: &FieldSpec) -> Control {
    match spec.kind {
        FieldKind::LongText => Control::TextArea,
        FieldKind::Choice(options) => Control::Select(options),
        FieldKind::Image => Control::Custom,
        FieldKind::Text | FieldKind::Email | FieldKind::Float | FieldKind::Int { .. } => {
            Control::Input
        }
    }
}

#[must_use]
pub fn input_attrs(spec: &FieldSpec) -> InputAttrs {
    let (min, max, step) = match spec.kind {
        FieldKind::Float => (None, None, Some("any")),
        FieldKind::Int { min, max } => (
            min.map(|v| v.to_string()),
            max.map(|v| v.to_string()),
            Some("1"),
        ),
        _ => (None, None, None),
    };
    InputAttrs {
        input_type: spec.kind.input_type(),
        min,
        max,
        step,
    }
}

/// Options of a choice field for the current raw value.
///
/// A disabled empty option leads the list and stays selected while `current`
/// is blank, so the browser never shows a choice the form does not hold.
/// Non-choice fields have no options.
#[must_use]
pub fn select_options(spec: &FieldSpec, current: &str) -> Vec<SelectOption> {
    let FieldKind::Choice(options) = spec.kind else {
        return Vec::new();
    };
    let prompt = if spec.placeholder.is_empty() {
        DEFAULT_SELECT_PROMPT
    } else {
        spec.placeholder
    };

    let mut rendered = Vec::with_capacity(options.len() + 1);
    rendered.push(SelectOption {
        value: "",
        label: prompt,
        selected: !options.contains(&current),
        disabled: true,
    });
    rendered.extend(options.iter().map(|&option| SelectOption {
        value: option,
        label: option,
        selected: option == current,
        disabled: false,
    }));
    rendered
}
