use crate::{
    classify::{ClassifyPipeline, Prediction},
    utils::error::ServiceError,
    Result,
};
use axum::{extract::Multipart, response::Json};
use serde_json::{json, Value};
use std::time::Instant;

/// 存活检查端点
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "AI service running"
    }))
}

/// Multipart图片上传分类处理器
pub async fn upload_image_handler(
    mut multipart: Multipart,
) -> Result<Json<Prediction>> {
    let start_time = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!("Processing upload request: request_id={}", request_id);

    let mut image_data: Option<axum::body::Bytes> = None;

    // 解析multipart数据
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ServiceError::InvalidInput(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or("unknown").to_string();

        match field_name.as_str() {
            "file" => {
                let data = field.bytes().await.map_err(|e| {
                    ServiceError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                tracing::debug!("Received file: {} bytes", data.len());
                image_data = Some(data);
            }
            _ => {
                tracing::debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // 验证必需的图像数据
    let image_data = image_data.ok_or_else(|| {
        ServiceError::InvalidInput("No image file provided".to_string())
    })?;

    // 执行分类流水线
    let prediction = ClassifyPipeline::process_bytes(&image_data)?;

    tracing::info!(
        "Upload request completed: request_id={}, label={}, confidence={:.3}, time={:.3}s",
        request_id,
        prediction.issue_type,
        prediction.confidence,
        start_time.elapsed().as_secs_f32()
    );

    Ok(Json(prediction))
}
