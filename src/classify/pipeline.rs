use crate::{
    classify::types::Prediction,
    image::{ImageLoader, ImagePreprocessor},
    model::get_classifier,
    Result,
};
use std::time::Instant;

/// 分类处理流水线
pub struct ClassifyPipeline;

impl ClassifyPipeline {
    /// 处理一次上传: 解码 → 预处理 → 推理 → 判定
    ///
    /// 解码失败在第一步返回, 模型宿主不会被触碰
    pub fn process_bytes(bytes: &[u8]) -> Result<Prediction> {
        let start_time = Instant::now();

        // 加载图像
        let image = ImageLoader::from_bytes(bytes)?;

        // 预处理为模型输入张量 [1, 224, 224, 3]
        let input = ImagePreprocessor::preprocess(&image);

        // 推理
        let classifier = get_classifier()?;
        let raw = classifier.predict(input)?;

        // 阈值判定与取整
        let prediction = Prediction::from_raw(raw);

        tracing::info!(
            "Classification completed: label={}, confidence={:.3}, time={:.3}s",
            prediction.issue_type,
            prediction.confidence,
            start_time.elapsed().as_secs_f32()
        );

        Ok(prediction)
    }
}
