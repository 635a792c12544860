use std::sync::{Mutex, MutexGuard, PoisonError};

use orderflow_core::OrderId;
use orderflow_orders::{Notifier, NotifyError};

/// A confirmation handed to [`TracingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentConfirmation {
    pub customer_email: String,
    pub order_id: OrderId,
}

/// Notifier that "sends" confirmations by emitting a tracing event.
///
/// Stand-in for a mail gateway in dev setups; never fails. Every confirmation
/// is kept so callers can report what would have been sent.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    sent: Mutex<Vec<SentConfirmation>>,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentConfirmation> {
        self.lock_sent().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.lock_sent().len()
    }

    pub fn was_sent(&self, order_id: OrderId) -> bool {
        self.lock_sent().iter().any(|c| c.order_id == order_id)
    }

    // A panic mid-push leaves the list intact, so a poisoned lock is still usable.
    fn lock_sent(&self) -> MutexGuard<'_, Vec<SentConfirmation>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for TracingNotifier {
    fn send_order_confirmation(&self, customer_email: &str, order_id: OrderId) -> Result<(), NotifyError> {
        tracing::info!(order_id = %order_id, "order confirmation sent");
        tracing::debug!(order_id = %order_id, customer_email, "confirmation recipient");
        self.lock_sent().push(SentConfirmation {
            customer_email: customer_email.to_string(),
            order_id,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_every_confirmation_in_order() {
        let notifier = TracingNotifier::new();
        notifier.send_order_confirmation("a@test.com", OrderId::new(1)).unwrap();
        notifier.send_order_confirmation("", OrderId::new(2)).unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].customer_email, "a@test.com");
        assert_eq!(sent[1].customer_email, "");
        assert!(notifier.was_sent(OrderId::new(2)));
        assert!(!notifier.was_sent(OrderId::new(3)));
        assert_eq!(notifier.sent_count(), 2);
    }

    #[test]
    fn poisoned_lock_still_reports_confirmations() {
        let notifier = TracingNotifier::new();
        notifier.send_order_confirmation("a@test.com", OrderId::new(1)).unwrap();

        std::thread::scope(|s| {
            let poisoner = s.spawn(|| {
                let _guard = notifier.sent.lock().unwrap();
                panic!("poison the confirmation list");
            });
            assert!(poisoner.join().is_err());
        });
        assert!(notifier.sent.is_poisoned());

        assert_eq!(notifier.sent_count(), 1);
        notifier.send_order_confirmation("b@test.com", OrderId::new(2)).unwrap();
        assert_eq!(notifier.sent().len(), 2);
    }

    #[test]
    fn customer_email_is_not_logged_at_info() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingNotifier::new()
                .send_order_confirmation("secret@test.com", OrderId::new(77))
                .unwrap();
        });

        let output = logs.contents();
        assert!(output.contains("order confirmation sent"));
        assert!(output.contains("77"));
        assert!(!output.contains("secret@test.com"));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
