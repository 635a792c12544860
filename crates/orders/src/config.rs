//! Processor configuration.

use core::str::FromStr;

use rust_decimal::Decimal;

use orderflow_core::{DomainError, Money};

/// Orders whose total strictly exceeds this amount get a confirmation.
pub const DEFAULT_NOTIFICATION_THRESHOLD: Money = Money::new(Decimal::ONE_HUNDRED);

pub const THRESHOLD_ENV: &str = "ORDERFLOW_NOTIFY_THRESHOLD";
pub const FAILURE_POLICY_ENV: &str = "ORDERFLOW_NOTIFY_FAILURE_POLICY";

/// What the processor does when the notifier reports a failure.
///
/// Persistence has already succeeded by the time the notifier runs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum NotificationFailurePolicy {
    /// Return the error to the caller; the order stays unprocessed.
    #[default]
    Propagate,
    /// Log it and report `false`; the order stays unprocessed.
    Suppress,
    /// Log it and finish processing as if the confirmation went out.
    Complete,
}

impl NotificationFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFailurePolicy::Propagate => "propagate",
            NotificationFailurePolicy::Suppress => "suppress",
            NotificationFailurePolicy::Complete => "complete",
        }
    }
}

impl core::fmt::Display for NotificationFailurePolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationFailurePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "suppress" => Ok(Self::Suppress),
            "complete" => Ok(Self::Complete),
            other => Err(DomainError::validation(format!(
                "unknown notification failure policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub notification_threshold: Money,
    pub notification_failure_policy: NotificationFailurePolicy,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            notification_threshold: DEFAULT_NOTIFICATION_THRESHOLD,
            notification_failure_policy: NotificationFailurePolicy::default(),
        }
    }
}

impl ProcessorConfig {
    /// Load from `ORDERFLOW_NOTIFY_THRESHOLD` and `ORDERFLOW_NOTIFY_FAILURE_POLICY`.
    ///
    /// Missing variables fall back to defaults; unparsable ones are logged and
    /// also fall back.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProcessorConfig::from_env`], reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let notification_threshold = match lookup(THRESHOLD_ENV) {
            Some(raw) => raw.parse::<Money>().unwrap_or_else(|e| {
                tracing::warn!(
                    "{THRESHOLD_ENV}={raw:?} is invalid ({e}); using {}",
                    defaults.notification_threshold
                );
                defaults.notification_threshold
            }),
            None => defaults.notification_threshold,
        };

        let notification_failure_policy = match lookup(FAILURE_POLICY_ENV) {
            Some(raw) => raw.parse::<NotificationFailurePolicy>().unwrap_or_else(|e| {
                tracing::warn!(
                    "{FAILURE_POLICY_ENV}={raw:?} is invalid ({e}); using {}",
                    defaults.notification_failure_policy
                );
                defaults.notification_failure_policy
            }),
            None => defaults.notification_failure_policy,
        };

        Self {
            notification_threshold,
            notification_failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ProcessorConfig::from_lookup(|_| None);
        assert_eq!(config, ProcessorConfig::default());
        assert_eq!(config.notification_threshold, Money::from_units(100));
        assert_eq!(config.notification_failure_policy, NotificationFailurePolicy::Propagate);
    }

    #[test]
    fn reads_threshold_and_policy() {
        let config = ProcessorConfig::from_lookup(lookup_from(&[
            (THRESHOLD_ENV, "250.50"),
            (FAILURE_POLICY_ENV, "Complete"),
        ]));
        assert_eq!(config.notification_threshold, Money::new(dec!(250.50)));
        assert_eq!(config.notification_failure_policy, NotificationFailurePolicy::Complete);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ProcessorConfig::from_lookup(lookup_from(&[
            (THRESHOLD_ENV, "lots"),
            (FAILURE_POLICY_ENV, "retry"),
        ]));
        assert_eq!(config, ProcessorConfig::default());
    }

    #[test]
    fn policy_parses_case_insensitively_and_displays_lowercase() {
        for policy in [
            NotificationFailurePolicy::Propagate,
            NotificationFailurePolicy::Suppress,
            NotificationFailurePolicy::Complete,
        ] {
            let upper = policy.to_string().to_uppercase();
            assert_eq!(upper.parse::<NotificationFailurePolicy>().unwrap(), policy);
        }
        assert!("ignore".parse::<NotificationFailurePolicy>().is_err());
    }
}
