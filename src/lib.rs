pub mod classify;
pub mod config;
pub mod image;
pub mod model;
pub mod utils;
pub mod web;

// 重新导出主要类型
pub use classify::Prediction;
pub use config::Config;
pub use utils::error::ServiceError;

pub type Result<T> = std::result::Result<T, ServiceError>;
