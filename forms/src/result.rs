//! Per-page result state.

/// Outcome of the most recent submission of one form.
///
/// Exactly one variant is active at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultState<T> {
    /// Nothing submitted yet, or the result was dismissed.
    Idle,
    /// A request is in flight.
    Loading,
    Success(T),
    /// Human-readable failure message.
    Error(String),
}

impl<T> Default for ResultState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ResultState<T> {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
