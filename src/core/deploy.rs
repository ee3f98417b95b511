use crate::core::intent::{filter_valid_ports, DeploymentIntent};
use crate::core::manifest::{build_deployment, build_service};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::api::{Api, PostParams};
use kube::Client;

pub const DEFAULT_REPLICAS: i32 = 1;

/// The cluster control-plane boundary: two create operations, nothing else.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    async fn create_deployment(&self, namespace: &str, deployment: &Deployment)
        -> Result<Deployment>;
    async fn create_service(&self, namespace: &str, service: &Service) -> Result<Service>;
}

#[derive(Clone)]
pub struct KubeControlPlane {
    client: Client,
}

impl KubeControlPlane {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ControlPlane for KubeControlPlane {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&PostParams::default(), deployment).await?)
    }

    async fn create_service(&self, namespace: &str, service: &Service) -> Result<Service> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&PostParams::default(), service).await?)
    }
}

pub struct Deployer<C: ControlPlane> {
    control_plane: C,
}

impl<C: ControlPlane> Deployer<C> {
    pub fn new(control_plane: C) -> Self {
        Self { control_plane }
    }

    /// Submits the Deployment and, when at least one valid port mapping
    /// exists, the Service — in that order. There is no rollback: a Service
    /// failure after a successful Deployment leaves the Deployment in place.
    pub async fn deploy(&self, intent: &DeploymentIntent) -> Result<()> {
        intent.validate()?;

        // 同一份過濾結果同時餵給兩個 builder
        let valid_ports = filter_valid_ports(&intent.ports);
        let target_ports: Vec<i32> = valid_ports
            .iter()
            .filter_map(|p| p.effective_target_port())
            .collect();

        let deployment = build_deployment(&intent.image, &intent.name, &target_ports, DEFAULT_REPLICAS);
        let created = self
            .control_plane
            .create_deployment(&intent.namespace, &deployment)
            .await?;
        tracing::info!(
            namespace = %intent.namespace,
            status = ?created.status,
            "Deployment created"
        );

        // 沒有有效的 port 就不需要 Service
        if valid_ports.is_empty() {
            return Ok(());
        }

        let service = build_service(&intent.name, &valid_ports);
        if let Err(e) = self
            .control_plane
            .create_service(&intent.namespace, &service)
            .await
        {
            tracing::error!(
                "Service creation for '{}' failed after the Deployment was created: {}",
                intent.name,
                e
            );
            return Err(e);
        }
        tracing::info!(namespace = %intent.namespace, "Service created");

        Ok(())
    }
}
