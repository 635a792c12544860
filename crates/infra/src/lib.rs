//! Infrastructure layer: reference adapters for the order capabilities.

pub mod notify;
pub mod persistence;


pub use notify::{SentConfirmation, TracingNotifier};
pub use persistence::InMemoryOrderStore;
