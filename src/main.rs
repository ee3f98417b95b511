use clap::Parser;
use kdeploy::utils::{logger, validation::Validate};
use kdeploy::{CliConfig, ClusterAuth, Deployer, KubeControlPlane};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kdeploy CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 本地路徑固定使用環境中的 kubeconfig
    let client = match ClusterAuth::Ambient.resolve().await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Cluster connection failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    let deployer = Deployer::new(KubeControlPlane::new(client));
    let intent = config.intent();

    match deployer.deploy(&intent).await {
        Ok(()) => {
            tracing::info!("✅ Deployment submitted successfully!");
            println!("✅ Deployment submitted successfully!");
            println!("📦 {} -> {}/{}-deployment", intent.image, intent.namespace, intent.name);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Deployment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                kdeploy::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                kdeploy::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                kdeploy::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                kdeploy::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
