use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Tensor shape mismatch: {0}")]
    TensorShape(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ORT error: {0}")]
    Ort(#[from] ort::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ImageDecode(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::ModelLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::ModelLoad(_) => "MODEL_LOAD_ERROR",
            ServiceError::ImageDecode(_) => "IMAGE_DECODE_ERROR",
            ServiceError::InvalidInput(_) => "INVALID_INPUT",
            ServiceError::TensorShape(_) => "TENSOR_SHAPE_ERROR",
            ServiceError::Inference(_) => "INFERENCE_ERROR",
            ServiceError::Config(_) => "CONFIG_ERROR",
            ServiceError::Io(_) => "IO_ERROR",
            ServiceError::Ort(_) => "ORT_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!("Request failed: {} ({})", self, status);

        // 解码失败沿用移动端约定的扁平错误体, 其余错误返回结构化错误
        let body = match &self {
            ServiceError::ImageDecode(_) => serde_json::json!({
                "error": "Invalid image"
            }),
            _ => serde_json::json!({
                "error": {
                    "code": self.error_code(),
                    "message": self.to_string(),
                }
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
