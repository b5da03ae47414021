//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from plain props and callbacks; pages own the form
//! signals and pass slices of them down.

pub mod form_fields;
pub mod nav_bar;
pub mod result_card;
