//! Node identity generation

use crate::config::{BootstrapConfig, Mode};

/// One cluster-node identity entry destined for the authorizer element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    /// Node index within the cluster
    pub index: u32,
    /// Principal authorized to join the cluster
    pub principal: String,
}

impl NodeIdentity {
    /// The `name` attribute of the generated property element
    pub fn key(&self) -> String {
        format!("Node Identity {}", self.index)
    }
}

/// Generate the identity entries for a resolved configuration.
///
/// The patch flow numbers nodes `0..N` and grants full distinguished names
/// built from the framework host; the render flow numbers nodes `1..=N` and
/// grants bare node labels.
pub fn node_identities(config: &BootstrapConfig) -> Vec<NodeIdentity> {
    match config.mode {
        Mode::Patch => (0..config.node_count)
            .map(|i| NodeIdentity {
                index: i,
                principal: format!("CN=nifi-{}-node.{}, OU=NIFI", i, config.framework_host),
            })
            .collect(),
        Mode::Render => (1..=config.node_count)
            .map(|i| NodeIdentity {
                index: i,
                principal: format!("nifi-{}", i),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: Mode, node_count: u32) -> BootstrapConfig {
        let mut config = BootstrapConfig::resolve(mode, |_| None).unwrap();
        config.node_count = node_count;
        config
    }

    #[test]
    fn test_patch_identities_start_at_zero() {
        let entries = node_identities(&config(Mode::Patch, 2));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key(), "Node Identity 0");
        assert_eq!(
            entries[0].principal,
            "CN=nifi-0-node.nifi.autoip.dcos.thisdcos.directory, OU=NIFI"
        );
        assert_eq!(entries[1].key(), "Node Identity 1");
        assert_eq!(
            entries[1].principal,
            "CN=nifi-1-node.nifi.autoip.dcos.thisdcos.directory, OU=NIFI"
        );
    }

    #[test]
    fn test_render_identities_start_at_one() {
        let entries = node_identities(&config(Mode::Render, 3));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].key(), "Node Identity 1");
        assert_eq!(entries[0].principal, "nifi-1");
        assert_eq!(entries[2].key(), "Node Identity 3");
        assert_eq!(entries[2].principal, "nifi-3");
    }

    #[test]
    fn test_custom_framework_host() {
        let mut cfg = config(Mode::Patch, 1);
        cfg.framework_host = "nifi.marathon.mesos".to_string();

        let entries = node_identities(&cfg);
        assert_eq!(entries[0].principal, "CN=nifi-0-node.nifi.marathon.mesos, OU=NIFI");
    }

    #[test]
    fn test_zero_nodes() {
        assert!(node_identities(&config(Mode::Patch, 0)).is_empty());
        assert!(node_identities(&config(Mode::Render, 0)).is_empty());
    }
}
