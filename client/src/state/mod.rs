//! Page state helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page holds one `RwSignal<RemoteForm<_>>` from the `forms` crate.
//! `submit` drives it through a request; `field_view` and `result_view` are
//! the plain view models the components render from; `routes` is the site
//! map shared by navigation and the home page.

pub mod field_view;
pub mod result_view;
pub mod routes;
pub mod submit;
