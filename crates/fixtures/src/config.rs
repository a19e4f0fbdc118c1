//! Default execution-config fixture.

use std::collections::BTreeMap;

use jobarchive_core::ArchivedExecutionConfig;

/// Builds an [`ArchivedExecutionConfig`] with neutral defaults.
///
/// `ArchivedExecutionConfigBuilder::new().build()` is the configuration an
/// archived graph fixture carries when none is given.
#[derive(Debug, Clone, Default)]
pub struct ArchivedExecutionConfigBuilder {
    execution_mode: Option<String>,
    restart_strategy_description: Option<String>,
    max_parallelism: Option<u32>,
    parallelism: Option<u32>,
    object_reuse_enabled: bool,
    periodic_materialize_interval_ms: Option<i64>,
    global_job_parameters: Option<BTreeMap<String, String>>,
}

impl ArchivedExecutionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execution_mode(mut self, mode: impl Into<String>) -> Self {
        self.execution_mode = Some(mode.into());
        self
    }

    pub fn restart_strategy_description(mut self, description: impl Into<String>) -> Self {
        self.restart_strategy_description = Some(description.into());
        self
    }

    pub fn max_parallelism(mut self, max_parallelism: u32) -> Self {
        self.max_parallelism = Some(max_parallelism);
        self
    }

    pub fn parallelism(mut self, parallelism: u32) -> Self {
        self.parallelism = Some(parallelism);
        self
    }

    pub fn object_reuse_enabled(mut self, enabled: bool) -> Self {
        self.object_reuse_enabled = enabled;
        self
    }

    pub fn periodic_materialize_interval_ms(mut self, interval_ms: i64) -> Self {
        self.periodic_materialize_interval_ms = Some(interval_ms);
        self
    }

    pub fn global_job_parameters(mut self, parameters: BTreeMap<String, String>) -> Self {
        self.global_job_parameters = Some(parameters);
        self
    }

    pub fn build(&self) -> ArchivedExecutionConfig {
        ArchivedExecutionConfig {
            execution_mode: self
                .execution_mode
                .clone()
                .unwrap_or_else(|| "PIPELINED".to_string()),
            restart_strategy_description: self
                .restart_strategy_description
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            max_parallelism: self.max_parallelism.unwrap_or(128),
            parallelism: self.parallelism.unwrap_or(1),
            object_reuse_enabled: self.object_reuse_enabled,
            periodic_materialize_interval_ms: self.periodic_materialize_interval_ms.unwrap_or(0),
            global_job_parameters: self.global_job_parameters.clone().unwrap_or_default(),
        }
    }
}
