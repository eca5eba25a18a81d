//! HTTP request handlers for the chatgate API.

pub mod chat;
pub mod settings;
pub mod system;
pub mod types;

pub use chat::*;
pub use settings::*;
pub use system::*;
