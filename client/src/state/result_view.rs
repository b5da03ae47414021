//! Result card view model.

#[cfg(test)]
#[path = "result_view_test.rs"]
mod result_view_test;

use forms::{ResultState, Summary};

/// What the result area shows for one [`ResultState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    Hidden,
    Busy,
    Ready { headline: String, details: Vec<String> },
    Failed(String),
}

impl ResultView {
    #[must_use]
    pub fn from_state<T: Summary>(state: &ResultState<T>) -> Self {
        match state {
            ResultState::Idle => Self::Hidden,
            ResultState::Loading => Self::Busy,
            ResultState::Success(value) => Self::Ready {
                headline: value.headline(),
                details: value.details(),
            },
            ResultState::Error(message) => Self::Failed(format!("Error: {message}")),
        }
    }
}

/// Submit button text for the current state.
#[must_use]
pub fn submit_label(loading: bool, idle: &'static str, busy: &'static str) -> &'static str {
    if loading { busy } else { idle }
}
