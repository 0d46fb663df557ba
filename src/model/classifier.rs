use crate::image::IMG_SIZE;
use crate::utils::error::ServiceError;
use crate::{Config, Result};
use ndarray::Array4;
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
    inputs,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// 坑洼二分类模型宿主, 进程生命周期内只加载一次
#[derive(Debug)]
pub struct PotholeClassifier {
    session: Arc<Mutex<Session>>,
    input_name: String,  // 加载时动态发现的输入名称
    output_name: String, // 加载时动态发现的输出名称
}

impl PotholeClassifier {
    pub fn new(config: &Config) -> Result<Self> {
        let model_path = &config.model_path;

        if !model_path.exists() {
            return Err(ServiceError::ModelLoad(
                format!("Classifier model not found: {}", model_path.display())
            ));
        }

        tracing::info!("Loading classifier model from: {}", model_path.display());

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(ort::Error::from)?
            .with_intra_threads(config.onnx_config.intra_threads)
            .map_err(ort::Error::from)?
            .commit_from_file(model_path)?;

        // 动态发现输入输出名称, 进程生命周期内固定不变
        if session.inputs().is_empty() {
            return Err(ServiceError::ModelLoad(
                "Classifier model has no inputs".to_string()
            ));
        }
        if session.outputs().is_empty() {
            return Err(ServiceError::ModelLoad(
                "Classifier model has no outputs".to_string()
            ));
        }

        let input_name = session.inputs()[0].name().to_string();
        let output_name = session.outputs()[0].name().to_string();
        tracing::info!("Classifier model input: '{}', output: '{}'", input_name, output_name);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            output_name,
        })
    }

    /// 单次前向推理: 写入输入张量, 执行一次前向传播, 读出标量输出
    ///
    /// 会话持有互斥锁, 并发请求的推理串行执行, 保证互不覆盖对方的缓冲区
    pub fn predict(&self, input: Array4<f32>) -> Result<f32> {
        // 调用前显式校验张量契约, 避免运行时错误逃逸为通用故障
        let expected = [1, IMG_SIZE, IMG_SIZE, 3];
        if input.shape() != expected.as_slice() {
            return Err(ServiceError::TensorShape(format!(
                "expected {:?}, got {:?}", expected, input.shape()
            )));
        }

        let input_tensor = Tensor::from_array(input)?;

        let raw = {
            let mut session = self.session.lock();
            let outputs = session.run(inputs![self.input_name.as_str() => input_tensor])?;

            let output = match outputs.get(&self.output_name) {
                Some(output) => output.try_extract_array::<f32>()?.into_owned(),
                None => {
                    let available_outputs: Vec<String> =
                        outputs.keys().map(|s| s.to_string()).collect();
                    return Err(ServiceError::Inference(format!(
                        "Classifier output '{}' not found. Available outputs: {:?}",
                        self.output_name, available_outputs
                    )));
                }
            };

            output.iter().next().copied().ok_or_else(|| {
                ServiceError::Inference("Classifier produced an empty output tensor".to_string())
            })?
        };

        Ok(raw)
    }
}
