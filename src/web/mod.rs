pub mod handlers;

use crate::{model::ModelManager, utils::error::ServiceError, Config, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

pub async fn serve(config: Config) -> Result<()> {
    // 启动时加载模型, 失败则拒绝启动
    ModelManager::init(config.clone())?;

    // 构建应用路由
    let app = create_app(&config);

    // 解析绑定地址
    let addr: SocketAddr = config.bind_addr
        .parse()
        .map_err(|e| ServiceError::Config(
            format!("Invalid bind address {}: {}", config.bind_addr, e)
        ))?;

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /              - Liveness check");
    tracing::info!("  POST /upload-image/ - Multipart image classification");

    // 启动服务器
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ServiceError::Internal(
            format!("Failed to bind to address {}: {}", addr, e)
        ))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::Internal(
            format!("Server failed to start: {}", e)
        ))?;

    Ok(())
}

/// 构建路由; 模型初始化由serve负责, 测试可独立构建路由
pub fn create_app(config: &Config) -> Router {
    Router::new()
        // 分类API路由
        .route("/upload-image/", post(handlers::upload_image_handler))

        // 系统路由
        .route("/", get(handlers::root_handler))

        // 添加中间件
        .layer(DefaultBodyLimit::max(config.server_config.max_request_size))
        .layer(RequestBodyLimitLayer::new(config.server_config.max_request_size))
        .layer(CorsLayer::permissive())
}
