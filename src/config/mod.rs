//! Bootstrap configuration resolved from the scheduler environment

use crate::error::{BootstrapError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sandbox directory provided by the scheduler
pub const ENV_SANDBOX: &str = "MESOS_SANDBOX";
/// Target NiFi version
pub const ENV_NIFI_VERSION: &str = "NIFI_VERSION";
/// Cluster node count for the patch flow
pub const ENV_NODE_COUNT: &str = "NODE_COUNT";
/// Scheduler task name
pub const ENV_TASK_NAME: &str = "TASK_NAME";
/// DNS suffix advertised for the framework
pub const ENV_FRAMEWORK_HOST: &str = "FRAMEWORK_HOST";
/// Cluster node count for the render flow
pub const ENV_RENDER_NODE_COUNT: &str = "NIFI_NODE_COUNT";

/// Default sandbox directory
pub const DEFAULT_SANDBOX: &str = ".";
/// Default NiFi version
pub const DEFAULT_NIFI_VERSION: &str = "1.3.0";
/// Default node count for the patch flow
pub const DEFAULT_NODE_COUNT: u32 = 1;
/// Default scheduler task name
pub const DEFAULT_TASK_NAME: &str = "nifi-0-node";
/// Default framework host suffix
pub const DEFAULT_FRAMEWORK_HOST: &str = "nifi.autoip.dcos.thisdcos.directory";
/// Default node count for the render flow
pub const DEFAULT_RENDER_NODE_COUNT: u32 = 3;

/// Bootstrap flow being configured
///
/// The two flows read different node-count variables and locate the
/// authorizers file differently: `Patch` rewrites
/// `config-templates/authorizers.xml` inside the sandbox in place, `Render`
/// patches `authorizers.xml` at the sandbox root and prints the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Overwrite the authorizers file in place
    Patch,
    /// Print the patched document to stdout
    Render,
}

/// Resolved bootstrap configuration
///
/// All environment access happens here, once, at startup. Core logic takes
/// the resolved struct and never consults the environment itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Bootstrap flow
    pub mode: Mode,
    /// Scheduler sandbox directory
    pub sandbox: PathBuf,
    /// Target NiFi version
    pub nifi_version: String,
    /// Number of cluster nodes to generate identity entries for
    pub node_count: u32,
    /// Scheduler task name
    pub task_name: String,
    /// DNS suffix for node hostnames
    pub framework_host: String,
}

impl BootstrapConfig {
    /// Resolve configuration from the process environment
    pub fn from_env(mode: Mode) -> Result<Self> {
        Self::resolve(mode, |key| std::env::var(key).ok())
    }

    /// Resolve configuration through an explicit variable lookup
    pub fn resolve<F>(mode: Mode, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (count_var, count_default) = match mode {
            Mode::Patch => (ENV_NODE_COUNT, DEFAULT_NODE_COUNT),
            Mode::Render => (ENV_RENDER_NODE_COUNT, DEFAULT_RENDER_NODE_COUNT),
        };

        let raw_count = lookup(count_var).unwrap_or_else(|| count_default.to_string());
        let node_count = raw_count.parse::<u32>().map_err(|_| {
            BootstrapError::InvalidConfig(format!(
                "{} must be a non-negative integer, got {:?}",
                count_var, raw_count
            ))
        })?;

        Ok(Self {
            mode,
            sandbox: PathBuf::from(
                lookup(ENV_SANDBOX).unwrap_or_else(|| DEFAULT_SANDBOX.to_string()),
            ),
            nifi_version: lookup(ENV_NIFI_VERSION)
                .unwrap_or_else(|| DEFAULT_NIFI_VERSION.to_string()),
            node_count,
            task_name: lookup(ENV_TASK_NAME).unwrap_or_else(|| DEFAULT_TASK_NAME.to_string()),
            framework_host: lookup(ENV_FRAMEWORK_HOST)
                .unwrap_or_else(|| DEFAULT_FRAMEWORK_HOST.to_string()),
        })
    }

    /// Location of the authorizers file for this flow
    pub fn authorizers_path(&self) -> PathBuf {
        match self.mode {
            Mode::Patch => self
                .sandbox
                .join("config-templates")
                .join("authorizers.xml"),
            Mode::Render => self.sandbox.join("authorizers.xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_patch() {
        let config = BootstrapConfig::resolve(Mode::Patch, |_| None).unwrap();
        assert_eq!(config.sandbox, PathBuf::from("."));
        assert_eq!(config.nifi_version, "1.3.0");
        assert_eq!(config.node_count, 1);
        assert_eq!(config.task_name, "nifi-0-node");
        assert_eq!(config.framework_host, "nifi.autoip.dcos.thisdcos.directory");
    }

    #[test]
    fn test_defaults_render() {
        let config = BootstrapConfig::resolve(Mode::Render, |_| None).unwrap();
        assert_eq!(config.node_count, 3);
    }

    #[test]
    fn test_explicit_values_win() {
        let config = BootstrapConfig::resolve(Mode::Patch, |key| match key {
            ENV_SANDBOX => Some("/mnt/sandbox".to_string()),
            ENV_NODE_COUNT => Some("5".to_string()),
            ENV_FRAMEWORK_HOST => Some("nifi.example.com".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.sandbox, PathBuf::from("/mnt/sandbox"));
        assert_eq!(config.node_count, 5);
        assert_eq!(config.framework_host, "nifi.example.com");
        assert_eq!(config.task_name, "nifi-0-node");
    }

    #[test]
    fn test_render_reads_its_own_count_variable() {
        let config = BootstrapConfig::resolve(Mode::Render, |key| match key {
            ENV_NODE_COUNT => Some("7".to_string()),
            _ => None,
        })
        .unwrap();

        // NODE_COUNT belongs to the patch flow; render keeps its default.
        assert_eq!(config.node_count, 3);
    }

    #[test]
    fn test_invalid_node_count() {
        let result = BootstrapConfig::resolve(Mode::Patch, |key| match key {
            ENV_NODE_COUNT => Some("three".to_string()),
            _ => None,
        });

        assert!(matches!(result, Err(BootstrapError::InvalidConfig(_))));
    }

    #[test]
    fn test_authorizers_path() {
        let patch = BootstrapConfig::resolve(Mode::Patch, |key| match key {
            ENV_SANDBOX => Some("/sandbox".to_string()),
            _ => None,
        })
        .unwrap();
        let render = BootstrapConfig::resolve(Mode::Render, |key| match key {
            ENV_SANDBOX => Some("/sandbox".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(
            patch.authorizers_path(),
            PathBuf::from("/sandbox/config-templates/authorizers.xml")
        );
        assert_eq!(
            render.authorizers_path(),
            PathBuf::from("/sandbox/authorizers.xml")
        );
    }
}
