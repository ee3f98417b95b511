pub mod auth;
#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
use crate::core::intent::{DeploymentIntent, PortMapping};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_resource_name, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kdeploy")]
#[command(about = "Deploys a container image to a Kubernetes cluster")]
pub struct CliConfig {
    #[arg(long, default_value = "nginx")]
    pub image: String,

    #[arg(long, default_value = "nginx")]
    pub name: String,

    #[arg(long, value_delimiter = ',', default_value = "80")]
    pub ports: Vec<i32>,

    #[arg(long, default_value = "default")]
    pub namespace: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn intent(&self) -> DeploymentIntent {
        let ports = self.ports.iter().map(|&p| PortMapping::new(p)).collect();
        DeploymentIntent::new(
            self.image.clone(),
            Some(self.name.clone()),
            ports,
            Some(self.namespace.clone()),
        )
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("image", &self.image)?;
        validate_resource_name("name", &self.name)?;
        validate_resource_name("namespace", &self.namespace)?;
        // 無效的 port (0 或負數) 會在過濾階段被丟棄，不在這裡擋下
        Ok(())
    }
}
