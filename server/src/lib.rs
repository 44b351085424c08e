//! # Server crate — HTTP layer of the todo list service
//!
//! Consumes the `api` crate's contracts and nothing else. Modules:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`application`] | Route table, session layer, listener |
//! | [`forms`] | Form payloads and field-level validation |
//! | [`handlers`] | One handler per route, outcome → HTTP response mapping |
//! | [`settings`] | Layered configuration: defaults → `config.toml` → environment |

pub mod application;
pub mod forms;
pub mod handlers;
pub mod settings;
