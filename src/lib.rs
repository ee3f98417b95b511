pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use config::auth::ClusterAuth;
pub use core::deploy::{ControlPlane, Deployer, KubeControlPlane};
pub use core::intent::{DeploymentIntent, PortMapping};
pub use utils::error::{DeployError, Result};
