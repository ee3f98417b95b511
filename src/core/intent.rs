use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_resource_name, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_PROTOCOL: &str = "TCP";

/// 連接埠映射。port 缺少或為 0 的映射視為無效，會在過濾時被丟棄。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortMapping {
    #[serde(default)]
    pub port: Option<i32>,
    #[serde(default)]
    pub target_port: Option<i32>,
    #[serde(default)]
    pub protocol: Option<String>,
}

impl PortMapping {
    pub fn new(port: i32) -> Self {
        Self {
            port: Some(port),
            target_port: None,
            protocol: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.port, Some(p) if p > 0)
    }

    /// target_port 缺少時退回 port。每個映射獨立判斷。
    pub fn effective_target_port(&self) -> Option<i32> {
        match self.target_port {
            Some(t) if t > 0 => Some(t),
            _ => self.port.filter(|p| *p > 0),
        }
    }

    pub fn protocol_or_default(&self) -> String {
        self.protocol
            .clone()
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string())
    }
}

/// The single canonical filter step. Both the Deployment's container ports
/// and the Service's forwarding rules are derived from this one list.
pub fn filter_valid_ports(ports: &[PortMapping]) -> Vec<PortMapping> {
    ports.iter().filter(|p| p.is_valid()).cloned().collect()
}

/// Derives a deployment name from an image reference: the path segment after
/// the last `/`, truncated at the first `:`.
pub fn derive_name(image: &str) -> String {
    let after_slash = image.rsplit('/').next().unwrap_or(image);
    let before_colon = after_slash.split(':').next().unwrap_or(after_slash);
    before_colon.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentIntent {
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    pub namespace: String,
}

impl DeploymentIntent {
    pub fn new(
        image: String,
        name: Option<String>,
        ports: Vec<PortMapping>,
        namespace: Option<String>,
    ) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| derive_name(&image));
        let namespace = namespace
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        Self {
            image,
            name,
            ports,
            namespace,
        }
    }
}

impl Validate for DeploymentIntent {
    fn validate(&self) -> Result<()> {
        if self.image.trim().is_empty() {
            return Err(DeployError::ValidationError {
                message: "image is required".to_string(),
            });
        }
        validate_non_empty_string("name", &self.name)?;
        validate_resource_name("name", &self.name)?;
        validate_resource_name("namespace", &self.namespace)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_strips_registry_and_tag() {
        assert_eq!(derive_name("registry.example.com/team/app:v1.2"), "app");
        assert_eq!(derive_name("nginx"), "nginx");
        assert_eq!(derive_name("nginx:1.25"), "nginx");
        assert_eq!(derive_name("library/nginx"), "nginx");
    }

    #[test]
    fn test_intent_derives_name_when_absent() {
        let intent = DeploymentIntent::new("myrepo/api:latest".to_string(), None, vec![], None);
        assert_eq!(intent.name, "api");
        assert_eq!(intent.namespace, "default");
    }

    #[test]
    fn test_intent_keeps_explicit_name() {
        let intent = DeploymentIntent::new(
            "myrepo/api:latest".to_string(),
            Some("frontend".to_string()),
            vec![],
            Some("staging".to_string()),
        );
        assert_eq!(intent.name, "frontend");
        assert_eq!(intent.namespace, "staging");
    }

    #[test]
    fn test_filter_drops_missing_and_zero_ports() {
        let ports = vec![
            PortMapping::new(80),
            PortMapping {
                port: None,
                target_port: Some(8080),
                protocol: None,
            },
            PortMapping {
                port: Some(0),
                target_port: None,
                protocol: None,
            },
            PortMapping::new(443),
        ];
        let valid = filter_valid_ports(&ports);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].port, Some(80));
        assert_eq!(valid[1].port, Some(443));
    }

    #[test]
    fn test_target_port_defaults_per_mapping() {
        // 明確的 target_port 不受其他映射的預設影響
        let with_target = PortMapping {
            port: Some(80),
            target_port: Some(8080),
            protocol: None,
        };
        let without_target = PortMapping::new(443);
        assert_eq!(with_target.effective_target_port(), Some(8080));
        assert_eq!(without_target.effective_target_port(), Some(443));
    }

    #[test]
    fn test_protocol_defaults_to_tcp() {
        let udp = PortMapping {
            port: Some(53),
            target_port: None,
            protocol: Some("UDP".to_string()),
        };
        assert_eq!(PortMapping::new(80).protocol_or_default(), "TCP");
        assert_eq!(udp.protocol_or_default(), "UDP");
    }

    #[test]
    fn test_validate_rejects_missing_image() {
        let intent = DeploymentIntent {
            image: "".to_string(),
            name: "app".to_string(),
            ports: vec![],
            namespace: "default".to_string(),
        };
        assert!(intent.validate().is_err());
    }
}
