#[cfg(feature = "lambda")]
use crate::config::auth::ClusterAuth;
#[cfg(feature = "lambda")]
use crate::core::intent::DEFAULT_NAMESPACE;
#[cfg(feature = "lambda")]
use crate::utils::error::Result;
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub auth: ClusterAuth,
    pub namespace: String,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    /// Selects the explicit auth path iff `HOST` or `API_TOKEN` is present in
    /// the environment (both are then required together); falls back to
    /// ambient credentials otherwise.
    pub fn from_env() -> Result<Self> {
        let auth = if env::var("HOST").is_ok() || env::var("API_TOKEN").is_ok() {
            ClusterAuth::from_env()?
        } else {
            ClusterAuth::Ambient
        };

        let namespace = env::var("NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());

        Ok(Self { auth, namespace })
    }
}
