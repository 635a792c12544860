//! Collaborator capabilities consumed by the order processor.
//!
//! Both traits take `&self`; implementations that track state (connection
//! flags, stored orders, sent messages) use interior mutability. Blanket impls
//! for `&S` and `Arc<S>` let a caller lend an adapter to the processor and
//! keep a handle to inspect it afterwards.

use std::sync::Arc;

use thiserror::Error;

use orderflow_core::OrderId;

use crate::order::Order;

/// Failure raised by a [`Persistence`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The store could not be reached or a connection could not be opened.
    #[error("connection error: {0}")]
    Connection(String),

    /// The store was reachable but rejected or failed the write/read.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("order {0} not found")]
    NotFound(OrderId),
}

impl PersistenceError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Failure raised by a [`Notifier`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl NotifyError {
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }
}

/// Durable order storage with an explicit connection lifecycle.
pub trait Persistence: Send + Sync {
    /// Current connection status. Must not have side effects.
    fn is_connected(&self) -> bool;

    /// Open a connection. Called at most once per processed order.
    fn connect(&self) -> Result<(), PersistenceError>;

    /// Store or overwrite the order.
    fn save(&self, order: &Order) -> Result<(), PersistenceError>;

    fn get_order(&self, id: OrderId) -> Result<Order, PersistenceError>;
}

/// Outbound customer messaging.
pub trait Notifier: Send + Sync {
    fn send_order_confirmation(&self, customer_email: &str, order_id: OrderId) -> Result<(), NotifyError>;
}

impl<S> Persistence for Arc<S>
where
    S: Persistence + ?Sized,
{
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn connect(&self) -> Result<(), PersistenceError> {
        (**self).connect()
    }

    fn save(&self, order: &Order) -> Result<(), PersistenceError> {
        (**self).save(order)
    }

    fn get_order(&self, id: OrderId) -> Result<Order, PersistenceError> {
        (**self).get_order(id)
    }
}

impl<S> Persistence for &S
where
    S: Persistence + ?Sized,
{
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn connect(&self) -> Result<(), PersistenceError> {
        (**self).connect()
    }

    fn save(&self, order: &Order) -> Result<(), PersistenceError> {
        (**self).save(order)
    }

    fn get_order(&self, id: OrderId) -> Result<Order, PersistenceError> {
        (**self).get_order(id)
    }
}

impl<S> Notifier for Arc<S>
where
    S: Notifier + ?Sized,
{
    fn send_order_confirmation(&self, customer_email: &str, order_id: OrderId) -> Result<(), NotifyError> {
        (**self).send_order_confirmation(customer_email, order_id)
    }
}

impl<S> Notifier for &S
where
    S: Notifier + ?Sized,
{
    fn send_order_confirmation(&self, customer_email: &str, order_id: OrderId) -> Result<(), NotifyError> {
        (**self).send_order_confirmation(customer_email, order_id)
    }
}
