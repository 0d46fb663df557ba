use image::{imageops::FilterType, DynamicImage, RgbImage};
use ndarray::{Array3, Array4, Axis};

/// 模型输入边长, 与训练时固定一致
pub const IMG_SIZE: usize = 224;

pub struct ImagePreprocessor;

impl ImagePreprocessor {
    /// 分类预处理流水线: 硬缩放到224x224 → 归一化到[0,1] → 添加batch维度
    pub fn preprocess(image: &DynamicImage) -> Array4<f32> {
        let resized = Self::resize(image);
        let normalized = Self::to_normalized_bgr(&resized);

        normalized.insert_axis(Axis(0))
    }

    /// 硬缩放, 不保持宽高比, 不裁剪不填充
    fn resize(image: &DynamicImage) -> RgbImage {
        image
            .resize_exact(IMG_SIZE as u32, IMG_SIZE as u32, FilterType::Triangle)
            .to_rgb8()
    }

    /// 转为f32并除以255; 模型训练数据经OpenCV解码, 通道顺序为BGR
    fn to_normalized_bgr(image: &RgbImage) -> Array3<f32> {
        let mut array = Array3::<f32>::zeros((IMG_SIZE, IMG_SIZE, 3));

        for (x, y, pixel) in image.enumerate_pixels() {
            array[[y as usize, x as usize, 0]] = pixel[2] as f32 / 255.0;
            array[[y as usize, x as usize, 1]] = pixel[1] as f32 / 255.0;
            array[[y as usize, x as usize, 2]] = pixel[0] as f32 / 255.0;
        }

        array
    }
}
