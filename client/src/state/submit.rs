//! Submission driver for page form signals.
//!
//! Validation and the state transition run synchronously inside the signal
//! update; the request itself is spawned on the browser task queue. The
//! completion goes back through `RemoteForm::complete`, which drops it if a
//! newer submission or a dismiss happened in the meantime.

use forms::contact::Contact;
use forms::{Endpoint, FormSpec, RemoteForm};
use leptos::prelude::*;

/// Signal holding one page's form.
pub type FormSignal<F> = RwSignal<RemoteForm<F>>;

#[must_use]
pub fn form_signal<F: FormSpec>() -> FormSignal<F> {
    RwSignal::new(RemoteForm::new())
}

pub fn set_field<F: FormSpec>(state: FormSignal<F>, name: &str, value: String) {
    state.update(|form| {
        form.set_field(name, value);
    });
}

pub fn dismiss<F: FormSpec>(state: FormSignal<F>) {
    state.update(RemoteForm::dismiss);
}

/// Validate and post `state` to `E::PATH`.
pub fn submit<E: Endpoint>(state: FormSignal<E>) {
    let Some(Ok(submission)) = state.try_update(RemoteForm::begin_submit) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::predict::<E>(&submission.request).await;
        if let Err(e) = &outcome {
            log::warn!(
                "{} failed: {} ({})",
                E::PATH,
                e,
                e.error_code()
            );
        }
        state.update(|form| {
            form.complete(submission.token, outcome);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
    }
}

/// Validate and deliver the contact form to the webhook, then alert the
/// confirmation or failure text.
pub fn submit_contact(state: FormSignal<Contact>) {
    let Some(Ok(submission)) = state.try_update(RemoteForm::begin_submit) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use forms::Summary;

        let outcome = crate::net::api::deliver_contact(&submission.request).await;
        let notice = match &outcome {
            Ok(delivered) => delivered.headline(),
            Err(e) => {
                log::warn!("contact delivery failed: {} ({})", e, e.error_code());
                forms::contact::FAILURE.to_owned()
            }
        };
        state.update(|form| {
            form.complete(submission.token, outcome);
        });
        crate::net::api::alert(&notice);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
    }
}
