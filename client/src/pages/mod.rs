//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signal and delegates rendering to `components`.
//! `panel` holds the form/result layout shared by the prediction pages.

pub mod contact;
pub mod crop_yield;
pub mod disease;
pub mod fertilizer;
pub mod home;
pub mod market;
pub(crate) mod panel;
pub mod soil_crop;
pub mod weather;
