//! circdesk — a terminal management console for a library circulation
//! backend.
//!
//! Staff create, edit, and delete books and members, and record or return
//! loans, against a remote HTTP API that owns all business rules and
//! persistence. The client keeps no truth of its own: collections are
//! re-fetched wholesale after every successful mutation, and the only
//! state that matters locally is what is currently typed into a form.

pub mod api;
pub mod app;
pub mod config;
pub mod forms;
pub mod logging;
pub mod models;
pub mod store;
pub mod terminal;
pub mod ui;
