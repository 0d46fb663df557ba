use crate::model::PotholeClassifier;
use crate::utils::error::ServiceError;
use crate::{Config, Result};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// 全局模型管理器单例, 初始化后只读
pub struct ModelManager {
    classifier: Arc<PotholeClassifier>,
    config: Config,
}

static MODEL_MANAGER: OnceCell<Arc<ModelManager>> = OnceCell::new();

impl ModelManager {
    /// 初始化全局模型管理器, 在服务启动时显式调用一次
    ///
    /// 模型加载失败时返回错误, 进程拒绝启动, 不降级服务
    pub fn init(config: Config) -> Result<()> {
        tracing::info!("Initializing model manager...");

        let classifier = Arc::new(PotholeClassifier::new(&config)?);

        let manager = ModelManager { classifier, config };

        MODEL_MANAGER.set(Arc::new(manager))
            .map_err(|_| ServiceError::Internal("Model manager already initialized".to_string()))?;

        tracing::info!("Model manager initialized successfully");
        Ok(())
    }

    /// 获取全局模型管理器实例
    pub fn instance() -> Result<Arc<ModelManager>> {
        MODEL_MANAGER.get()
            .cloned()
            .ok_or_else(|| ServiceError::Internal("Model manager not initialized".to_string()))
    }

    /// 获取分类器引用
    pub fn classifier(&self) -> Arc<PotholeClassifier> {
        Arc::clone(&self.classifier)
    }

    /// 获取配置引用
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// 便捷函数：获取分类器
pub fn get_classifier() -> Result<Arc<PotholeClassifier>> {
    let manager = ModelManager::instance()?;
    Ok(manager.classifier())
}
