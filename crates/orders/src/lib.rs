//! Order processing rule (validate, persist, confirm).
//!
//! This crate owns the business rule only. Storage and customer messaging are
//! reached through the [`Persistence`] and [`Notifier`] capabilities, which the
//! embedding application supplies.

pub mod capability;
pub mod config;
pub mod error;
pub mod order;
pub mod processor;

pub use capability::{Notifier, NotifyError, Persistence, PersistenceError};
pub use config::{NotificationFailurePolicy, ProcessorConfig, DEFAULT_NOTIFICATION_THRESHOLD};
pub use error::ProcessError;
pub use order::Order;
pub use processor::OrderProcessor;
