//! Request and response types shared by the API handlers.
//!
//! Field names follow the original wire format of the service
//! (`Login`, `sessionToken`, ...), so every struct carries explicit
//! serde renames instead of a blanket rename_all.

mod auth;
mod chat;
mod common;
mod settings;

pub use auth::*;
pub use chat::*;
pub use common::*;
pub use settings::*;
