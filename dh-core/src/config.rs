use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::*;
use crate::prelude::*;

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryPolicy {
    pub attempts: usize,
    pub delay_seconds: u64,
}

impl Default for RetryPolicy {
    fn default() -> RetryPolicy {
        RetryPolicy {
            attempts: RETRY_ATTEMPTS,
            delay_seconds: RETRY_DELAY_SECONDS,
        }
    }
}

impl RetryPolicy {
    // Useful in tests and CLIs that want failures to surface immediately
    pub fn none() -> RetryPolicy {
        RetryPolicy { attempts: 1, delay_seconds: 0 }
    }
}

// All reconciliation behavior is a function of this config plus the inputs;
// the engine never reads process environment or other ambient state.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    // Namespaces this engine is allowed to reconcile; empty means "any".
    pub managed_namespaces: Vec<String>,

    pub retry: RetryPolicy,
}

impl EngineConfig {
    pub fn check_namespace(&self, namespace: &str) -> Result<(), ConfigError> {
        if !self.managed_namespaces.is_empty() && !self.managed_namespaces.iter().any(|ns| ns == namespace) {
            return Err(ConfigError::UnmanagedNamespace(namespace.into()));
        }
        Ok(())
    }
}
