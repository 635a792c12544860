use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};

use orderflow_core::OrderId;
use orderflow_orders::{Order, Persistence, PersistenceError};

/// In-memory order store.
///
/// Intended for tests/dev. Keeps a snapshot per order id (last save wins) and
/// models a connection that must be opened before reads and writes.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    connected: AtomicBool,
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    /// A store that starts disconnected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_connected() -> Self {
        Self {
            connected: AtomicBool::new(true),
            ..Self::default()
        }
    }

    /// Drop the connection; stored orders are kept.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.orders.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn require_connection(&self) -> Result<(), PersistenceError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(PersistenceError::connection("store is not connected"))
        }
    }
}

impl Persistence for InMemoryOrderStore {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn connect(&self) -> Result<(), PersistenceError> {
        self.connected.store(true, Ordering::SeqCst);
        tracing::debug!("in-memory order store connected");
        Ok(())
    }

    fn save(&self, order: &Order) -> Result<(), PersistenceError> {
        self.require_connection()?;
        let mut orders = self
            .orders
            .write()
            .map_err(|_| PersistenceError::storage("order map lock poisoned"))?;
        orders.insert(order.id, order.clone());
        tracing::debug!(order_id = %order.id, "order saved");
        Ok(())
    }

    fn get_order(&self, id: OrderId) -> Result<Order, PersistenceError> {
        self.require_connection()?;
        let orders = self
            .orders
            .read()
            .map_err(|_| PersistenceError::storage("order map lock poisoned"))?;
        orders.get(&id).cloned().ok_or(PersistenceError::NotFound(id))
    }
}
