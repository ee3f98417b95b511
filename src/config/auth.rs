use crate::utils::error::{DeployError, Result};
use crate::utils::validation::validate_url;
use http::Uri;
use kube::{Client, Config};
use secrecy::SecretString;
use std::env;

/// Host used when the explicit path is selected with an empty host value.
pub const DEFAULT_HOST: &str = "http://localhost";

/// The two supported ways of reaching the cluster API. Exactly one strategy
/// is used per handle.
#[derive(Debug, Clone)]
pub enum ClusterAuth {
    /// Kubeconfig or in-cluster service account, whichever is discoverable.
    Ambient,
    Explicit {
        host: String,
        token: Option<String>,
        verify_tls: bool,
    },
}

impl ClusterAuth {
    /// Explicit-auth configuration from the environment. `HOST` and
    /// `API_TOKEN` are required together; `VERIFY_TLS=false` opts out of
    /// certificate verification.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").map_err(|_| DeployError::MissingConfigError {
            field: "HOST".to_string(),
        })?;
        let token = env::var("API_TOKEN").map_err(|_| DeployError::MissingConfigError {
            field: "API_TOKEN".to_string(),
        })?;
        let verify_tls = env::var("VERIFY_TLS")
            .map(|v| v != "false")
            .unwrap_or(true);

        // 空的 host 會退回預設值，非空就必須是合法的 URL
        if !host.is_empty() {
            validate_url("HOST", &host)?;
        }

        Ok(Self::Explicit {
            host,
            token: Some(token),
            verify_tls,
        })
    }

    pub async fn resolve(&self) -> Result<Client> {
        match self {
            ClusterAuth::Ambient => {
                let config =
                    Config::infer()
                        .await
                        .map_err(|e| DeployError::ConfigError {
                            message: format!("failed to load cluster configuration: {}", e),
                        })?;
                Ok(Client::try_from(config)?)
            }
            ClusterAuth::Explicit {
                host,
                token,
                verify_tls,
            } => {
                let host = if host.is_empty() { DEFAULT_HOST } else { host };
                let cluster_url: Uri =
                    host.parse()
                        .map_err(|e| DeployError::InvalidConfigValueError {
                            field: "host".to_string(),
                            value: host.to_string(),
                            reason: format!("not a valid cluster endpoint: {}", e),
                        })?;

                let mut config = Config::new(cluster_url);
                config.accept_invalid_certs = !verify_tls;
                if let Some(token) = token {
                    // 以 bearer token 送出 `authorization: Bearer <token>`
                    config.auth_info.token = Some(SecretString::from(token.clone()));
                }

                Ok(Client::try_from(config)?)
            }
        }
    }
}
