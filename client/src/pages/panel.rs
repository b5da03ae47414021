//! Form and result layout shared by the prediction pages.

use forms::{Endpoint, FormSpec};
use leptos::prelude::*;

use crate::components::form_fields::FormFields;
use crate::components::result_card::ResultCard;
use crate::state::result_view::{ResultView, submit_label};
use crate::state::submit::{FormSignal, dismiss, set_field};

/// Submit button text, idle and busy.
#[derive(Clone, Copy)]
pub struct Labels {
    pub idle: &'static str,
    pub busy: &'static str,
}

/// Schema-driven form for `state`, calling `on_submit` when valid input
/// should be sent.
pub fn form_panel<F: FormSpec>(
    state: FormSignal<F>,
    labels: Labels,
    on_submit: Callback<()>,
) -> impl IntoView {
    let values = Signal::derive(move || state.with(|s| s.form().clone()));
    let errors = Signal::derive(move || state.with(|s| s.field_errors().to_vec()));
    let loading = Signal::derive(move || state.with(forms::RemoteForm::is_loading));
    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        set_field(state, name, value);
    });

    view! {
        <form
            class="form-card"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="form-card__title">{F::schema().title}</h2>
            <FormFields
                schema=F::schema()
                values=values
                errors=errors
                disabled=loading
                on_input=on_input
            />
            <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                {move || submit_label(loading.get(), labels.idle, labels.busy)}
            </button>
        </form>
    }
}

/// Headline + detail card for the result of `state`.
pub fn summary_panel<F: FormSpec>(state: FormSignal<F>) -> impl IntoView {
    let result = Signal::derive(move || state.with(|s| ResultView::from_state(s.result())));
    let on_dismiss = Callback::new(move |()| dismiss(state));
    view! { <ResultCard result=result on_dismiss=on_dismiss/> }
}

/// Form plus summary card: the whole body of a simple prediction page.
pub fn prediction_page<E: Endpoint>(
    heading: &'static str,
    intro: &'static str,
    labels: Labels,
) -> impl IntoView {
    let state = crate::state::submit::form_signal::<E>();
    let on_submit = Callback::new(move |()| crate::state::submit::submit::<E>(state));
    view! {
        <section class="page-section">
            <h1>{heading}</h1>
            <p class="page-section__intro">{intro}</p>
            {form_panel(state, labels, on_submit)}
            {summary_panel(state)}
        </section>
    }
}
