//! Configuration for the query pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// Tuning parameters for the query orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    /// Execution timeout applied to every external capability call.
    ///
    /// A call exceeding it is treated as that stage's failure under the
    /// stage's usual policy (fatal or degraded).
    pub stage_timeout: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { stage_timeout: Duration::from_secs(30) }
    }
}

impl QueryConfig {
    /// Create a new builder for constructing a [`QueryConfig`].
    pub fn builder() -> QueryConfigBuilder {
        QueryConfigBuilder::default()
    }
}

/// Builder for a validated [`QueryConfig`].
#[derive(Debug, Clone, Default)]
pub struct QueryConfigBuilder {
    config: QueryConfig,
}

impl QueryConfigBuilder {
    /// Set the per-stage execution timeout.
    pub fn stage_timeout(mut self, timeout: Duration) -> Self {
        self.config.stage_timeout = timeout;
        self
    }

    /// Build the [`QueryConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidConfig`] if the timeout is zero.
    pub fn build(self) -> Result<QueryConfig> {
        if self.config.stage_timeout.is_zero() {
            return Err(QueryError::InvalidConfig(
                "stage_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
