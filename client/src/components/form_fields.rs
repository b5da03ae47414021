//! Schema-driven form inputs.
//!
//! Renders one labelled control per field of a [`FormSchema`], showing the
//! field's validation error underneath. Image fields are skipped; pages that
//! have one render their own picker.

use forms::{FieldSpec, FormSchema, FormState, ValidationError};
use leptos::prelude::*;

use crate::state::field_view::{Control, input_attrs, select_options};

#[component]
pub fn FormFields(
    schema: &'static FormSchema,
    #[prop(into)] values: Signal<FormState>,
    #[prop(into)] errors: Signal<Vec<ValidationError>>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<(&'static str, String)>,
) -> impl IntoView {
    schema
        .fields
        .iter()
        .copied()
        .filter(|spec| crate::state::field_view::control(spec) != Control::Custom)
        .map(|spec| {
            let error = move || {
                errors.with(|all| {
                    all.iter()
                        .find(|e| e.field() == spec.name)
                        .map(ToString::to_string)
                })
            };
            view! {
                <div class="form-field">
                    <label class="form-field__label" for=spec.name>
                        {spec.label}
                    </label>
                    {field_control(spec, values, disabled, on_input)}
                    <Show when=move || error().is_some()>
                        <p class="form-field__error">{move || error().unwrap_or_default()}</p>
                    </Show>
                </div>
            }
        })
        .collect_view()
}

fn field_control(
    spec: FieldSpec,
    values: Signal<FormState>,
    disabled: Signal<bool>,
    on_input: Callback<(&'static str, String)>,
) -> AnyView {
    let value = move || values.with(|form| form.get(spec.name).to_owned());

    match crate::state::field_view::control(&spec) {
        Control::TextArea => view! {
            <textarea
                class="form-field__input form-field__input--long"
                id=spec.name
                name=spec.name
                rows="5"
                required=true
                placeholder=spec.placeholder
                prop:value=value
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run((spec.name, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        Control::Select(_) => view! {
            <select
                class="form-field__input"
                id=spec.name
                name=spec.name
                required=true
                disabled=move || disabled.get()
                on:change=move |ev| on_input.run((spec.name, event_target_value(&ev)))
            >
                {move || {
                    select_options(&spec, &value())
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.value
                                    disabled=option.disabled
                                    selected=option.selected
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        Control::Input | Control::Custom => {
            let attrs = input_attrs(&spec);
            view! {
                <input
                    class="form-field__input"
                    id=spec.name
                    name=spec.name
                    type=attrs.input_type
                    min=attrs.min
                    max=attrs.max
                    step=attrs.step
                    required=true
                    placeholder=spec.placeholder
                    prop:value=value
                    disabled=move || disabled.get()
                    on:input=move |ev| on_input.run((spec.name, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    }
}
