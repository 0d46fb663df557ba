use serde::Serialize;

/// 判定阈值: 严格大于该值才判定为坑洼, 等于0.5归为平整路面
pub const POTHOLE_THRESHOLD: f32 = 0.5;

pub const LABEL_POTHOLE: &str = "Pothole";
pub const LABEL_PLAIN_ROAD: &str = "Plain Road";

/// 单次分类结果
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// 路面问题类型
    pub issue_type: &'static str,

    /// 置信度, 保留3位小数
    pub confidence: f32,
}

impl Prediction {
    /// 根据模型原始标量输出构造预测结果
    pub fn from_raw(raw: f32) -> Self {
        Self {
            issue_type: label_for(raw),
            confidence: round_confidence(raw),
        }
    }
}

/// 标签是置信度的阶跃函数
pub fn label_for(confidence: f32) -> &'static str {
    if confidence > POTHOLE_THRESHOLD {
        LABEL_POTHOLE
    } else {
        LABEL_PLAIN_ROAD
    }
}

/// 保留3位小数, 千分位上四舍五入(半值远离零)
pub fn round_confidence(raw: f32) -> f32 {
    (raw * 1000.0).round() / 1000.0
}
