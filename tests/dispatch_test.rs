use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kdeploy::core::dispatch::{handle_batch, SnsEvent};
use kdeploy::{ControlPlane, Deployer};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct DeployLog {
    deployments: Mutex<Vec<(String, String)>>,
    services: Mutex<Vec<String>>,
}

struct FakeControlPlane {
    log: Arc<DeployLog>,
}

#[async_trait]
impl ControlPlane for FakeControlPlane {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> kdeploy::Result<Deployment> {
        let name = deployment.metadata.name.clone().unwrap_or_default();
        self.log
            .deployments
            .lock()
            .unwrap()
            .push((namespace.to_string(), name));
        Ok(deployment.clone())
    }

    async fn create_service(
        &self,
        namespace: &str,
        service: &Service,
    ) -> kdeploy::Result<Service> {
        self.log.services.lock().unwrap().push(namespace.to_string());
        Ok(service.clone())
    }
}

fn deployer_with_log() -> (Deployer<FakeControlPlane>, Arc<DeployLog>) {
    let log = Arc::new(DeployLog::default());
    let deployer = Deployer::new(FakeControlPlane { log: log.clone() });
    (deployer, log)
}

fn sns_event(messages: &[&str]) -> SnsEvent {
    let records: Vec<serde_json::Value> = messages
        .iter()
        .map(|m| serde_json::json!({"Sns": {"Message": m}}))
        .collect();
    serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
}

#[tokio::test]
async fn test_batch_deploys_each_record_with_default_port() {
    let (deployer, log) = deployer_with_log();
    let event = sns_event(&[
        r#"{"registry":"ecr","image":"nginx","name":"nginx"}"#,
        r#"{"registry":"ecr","image":"myrepo/api:v3"}"#,
    ]);

    let response = handle_batch(&deployer, &event, "default").await;
    assert_eq!(response, serde_json::json!({}));

    let deployments = log.deployments.lock().unwrap().clone();
    assert_eq!(
        deployments,
        vec![
            ("default".to_string(), "nginx-deployment".to_string()),
            ("default".to_string(), "api-deployment".to_string()),
        ]
    );
    // 預設 port 80 -> 每筆記錄都會建立 Service
    assert_eq!(log.services.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bad_record_does_not_stop_the_batch() {
    let (deployer, log) = deployer_with_log();
    let event = sns_event(&[
        "not json at all",
        r#"{"registry":"ecr"}"#,
        r#"{"registry":"ecr","image":"registry.example.com/team/app:v1.2"}"#,
    ]);

    let response = handle_batch(&deployer, &event, "default").await;
    assert_eq!(response, serde_json::json!({}));

    // 只有最後一筆成功，名稱從 image 推導
    let deployments = log.deployments.lock().unwrap().clone();
    assert_eq!(
        deployments,
        vec![("default".to_string(), "app-deployment".to_string())]
    );
}

#[tokio::test]
async fn test_batch_uses_configured_namespace() {
    let (deployer, log) = deployer_with_log();
    let event = sns_event(&[r#"{"image":"nginx"}"#]);

    handle_batch(&deployer, &event, "staging").await;

    let deployments = log.deployments.lock().unwrap().clone();
    assert_eq!(deployments[0].0, "staging");
}

#[tokio::test]
async fn test_empty_batch_is_a_noop() {
    let (deployer, log) = deployer_with_log();
    let event: SnsEvent = serde_json::from_str(r#"{"Records": []}"#).unwrap();

    let response = handle_batch(&deployer, &event, "default").await;
    assert_eq!(response, serde_json::json!({}));
    assert!(log.deployments.lock().unwrap().is_empty());
}
