#[cfg(feature = "lambda")]
use kdeploy::core::dispatch::{handle_batch, SnsEvent};
#[cfg(feature = "lambda")]
use kdeploy::utils::logger;
#[cfg(feature = "lambda")]
use kdeploy::{Deployer, KubeControlPlane, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<SnsEvent>) -> Result<serde_json::Value, Error> {
    tracing::info!("Starting deploy Lambda function");

    // 環境決定連線方式：HOST/API_TOKEN 存在時走 explicit，否則用 kubeconfig
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let client = config
        .auth
        .resolve()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let deployer = Deployer::new(KubeControlPlane::new(client));
    let response = handle_batch(&deployer, &event.payload, &config.namespace).await;

    tracing::info!("Deploy Lambda function completed");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
