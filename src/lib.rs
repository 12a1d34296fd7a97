//! Donor impact dashboard: a Yew front-end for a foundation's REST backend.
//!
//! Remote data is owned by the hooks in [`hooks`]; each hook performs one
//! fetch per mount and exposes a `Loading`/`Loaded`/`Error` state to the
//! presentation components in [`components`].

pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
