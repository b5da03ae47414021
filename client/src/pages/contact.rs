//! Contact page. Messages go to the team's chat webhook, not the
//! prediction service.

use forms::contact::Contact;
use leptos::prelude::*;

use super::panel::{Labels, form_panel};
use crate::components::result_card::ResultCard;
use crate::state::result_view::ResultView;
use crate::state::submit::{dismiss, form_signal, submit_contact};

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = form_signal::<Contact>();
    let on_submit = Callback::new(move |()| submit_contact(state));
    let on_dismiss = Callback::new(move |()| dismiss(state));
    let result = Signal::derive(move || state.with(|s| ResultView::from_state(s.result())));

    view! {
        <section class="page-section">
            <h1>"Contact Us"</h1>
            <p class="page-section__intro">
                "Questions about a recommendation or the service? Send us a message."
            </p>
            {form_panel(
                state,
                Labels {
                    idle: "Send Message",
                    busy: "Sending...",
                },
                on_submit,
            )}
            <ResultCard result=result on_dismiss=on_dismiss dismiss_label="Send Another"/>
        </section>
    }
}
