use anyhow::Result;
use clap::Parser;
use pothole_service::{config::Config, web::serve};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pothole-service")]
#[command(about = "ONNX-powered pothole image classification service")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Model file path
    #[arg(long, default_value = "pothole_classifier.onnx")]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level))
        )
        .with_target(false)
        .init();

    tracing::info!("Starting pothole classification service...");
    tracing::info!("Bind address: {}", args.bind);
    tracing::info!("Model path: {}", args.model);

    // 创建配置
    let config = Config::new(args.bind, args.model)?;

    // 启动服务器
    serve(config).await?;

    Ok(())
}
