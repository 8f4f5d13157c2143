//! Search configuration

use serde::{Deserialize, Serialize};

/// How the result cap is enforced across passes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CapPolicy {
    /// Name, album, year and member passes stop once the list holds more
    /// than `result_cap` entries (so it may end at `result_cap + 1`); the
    /// location pass only appends while below `result_cap`.
    #[default]
    Legacy,

    /// Every pass appends only while below `result_cap`.
    Strict,
}

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results, see [`CapPolicy`]
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,

    #[serde(default)]
    pub cap_policy: CapPolicy,
}

fn default_result_cap() -> usize {
    16
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
            cap_policy: CapPolicy::default(),
        }
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn result_cap(mut self, cap: usize) -> Self {
        self.config.result_cap = cap;
        self
    }

    pub fn cap_policy(mut self, policy: CapPolicy) -> Self {
        self.config.cap_policy = policy;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
