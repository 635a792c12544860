use crate::capability::{Notifier, Persistence, PersistenceError};
use crate::config::{NotificationFailurePolicy, ProcessorConfig};
use crate::error::ProcessError;
use crate::order::Order;

/// Validates, persists and (above the threshold) confirms orders.
///
/// Flow for a single order:
///
/// 1. Reject non-positive totals without touching any collaborator.
/// 2. Make sure the store is connected (one `connect` attempt, no retry).
/// 3. Save the order.
/// 4. If the total strictly exceeds the threshold, send a confirmation.
/// 5. Mark the order processed.
///
/// Failures in steps 2-3 are absorbed and reported as `Ok(false)`. Failures in
/// step 4 follow [`NotificationFailurePolicy`].
#[derive(Debug, Clone)]
pub struct OrderProcessor<P, N> {
    persistence: P,
    notifier: N,
    config: ProcessorConfig,
}

impl<P, N> OrderProcessor<P, N>
where
    P: Persistence,
    N: Notifier,
{
    pub fn new(persistence: P, notifier: N) -> Self {
        Self {
            persistence,
            notifier,
            config: ProcessorConfig::default(),
        }
    }

    /// Build from collaborators whose presence is only known at runtime.
    pub fn try_new(persistence: Option<P>, notifier: Option<N>) -> Result<Self, ProcessError> {
        let persistence = persistence.ok_or(ProcessError::InvalidArgument("persistence"))?;
        let notifier = notifier.ok_or(ProcessError::InvalidArgument("notifier"))?;
        Ok(Self::new(persistence, notifier))
    }

    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Nullable entry point: a missing order is a caller bug and is reported
    /// as `InvalidArgument`, never as `false`.
    pub fn process(&self, order: Option<&mut Order>) -> Result<bool, ProcessError> {
        let order = order.ok_or(ProcessError::InvalidArgument("order"))?;
        self.process_order(order)
    }

    /// Process one order. `Ok(true)` means the order was saved and is now
    /// marked processed.
    pub fn process_order(&self, order: &mut Order) -> Result<bool, ProcessError> {
        if !order.total_amount.is_positive() {
            tracing::debug!(
                order_id = %order.id,
                amount = %order.total_amount,
                "rejecting order with non-positive total"
            );
            return Ok(false);
        }

        if let Err(e) = self.persist(order) {
            tracing::warn!(order_id = %order.id, error = %e, "order was not persisted");
            return Ok(false);
        }

        if order.total_amount.exceeds(self.config.notification_threshold) {
            if let Err(e) = self
                .notifier
                .send_order_confirmation(&order.customer_email, order.id)
            {
                match self.config.notification_failure_policy {
                    NotificationFailurePolicy::Propagate => return Err(e.into()),
                    NotificationFailurePolicy::Suppress => {
                        tracing::warn!(order_id = %order.id, error = %e, "order confirmation failed");
                        return Ok(false);
                    }
                    NotificationFailurePolicy::Complete => {
                        tracing::warn!(
                            order_id = %order.id,
                            error = %e,
                            "order confirmation failed; completing anyway"
                        );
                    }
                }
            }
        }

        order.mark_processed();
        tracing::info!(order_id = %order.id, amount = %order.total_amount, "order processed");
        Ok(true)
    }

    // Connectivity + save; the only region whose errors become `false`.
    fn persist(&self, order: &Order) -> Result<(), PersistenceError> {
        self.ensure_connection()?;
        self.persistence.save(order)
    }

    fn ensure_connection(&self) -> Result<(), PersistenceError> {
        if !self.persistence.is_connected() {
            tracing::debug!("persistence not connected; connecting");
            self.persistence.connect()?;
        }
        Ok(())
    }
}
