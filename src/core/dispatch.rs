use crate::core::deploy::{ControlPlane, Deployer};
use crate::core::intent::{DeploymentIntent, PortMapping};
use crate::utils::error::Result;
use serde::Deserialize;

/// Every deployment triggered from the event path exposes this port.
pub const DEFAULT_PORT: i32 = 80;

#[derive(Debug, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Deserialize)]
pub struct SnsMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// The notification published when a container image lands in the registry.
#[derive(Debug, Deserialize)]
pub struct PushNotification {
    pub registry: Option<String>,
    pub image: String,
    pub name: Option<String>,
}

/// Processes a batch sequentially. A failing record is logged and skipped;
/// redelivery is the event source's responsibility, so the acknowledgment is
/// always an empty object.
pub async fn handle_batch<C: ControlPlane>(
    deployer: &Deployer<C>,
    event: &SnsEvent,
    namespace: &str,
) -> serde_json::Value {
    tracing::info!("Processing batch with {} record(s)", event.records.len());

    for record in &event.records {
        if let Err(e) = handle_record(deployer, record, namespace).await {
            tracing::error!("Record processing failed: {}", e);
        }
    }

    serde_json::json!({})
}

async fn handle_record<C: ControlPlane>(
    deployer: &Deployer<C>,
    record: &SnsRecord,
    namespace: &str,
) -> Result<()> {
    let msg: PushNotification = serde_json::from_str(&record.sns.message)?;
    tracing::info!(
        "deploying {} from {}",
        msg.image,
        msg.registry.as_deref().unwrap_or("unknown registry")
    );

    let intent = DeploymentIntent::new(
        msg.image,
        msg.name,
        vec![PortMapping::new(DEFAULT_PORT)],
        Some(namespace.to_string()),
    );
    deployer.deploy(&intent).await
}
