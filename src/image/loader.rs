use crate::utils::error::ServiceError;
use crate::Result;
use image::DynamicImage;

pub struct ImageLoader;

impl ImageLoader {
    /// 从字节流加载图像
    pub fn from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
        let image = image::load_from_memory(bytes)
            .map_err(ServiceError::ImageDecode)?;

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    #[test]
    fn decodes_png_from_memory() {
        let mut buffer = Vec::new();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([120, 30, 200])));
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();

        let decoded = ImageLoader::from_bytes(&buffer).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
    }

    #[test]
    fn rejects_empty_buffer() {
        let err = ImageLoader::from_bytes(&[]).unwrap_err();
        assert!(matches!(err, ServiceError::ImageDecode(_)));
    }

    #[test]
    fn rejects_arbitrary_text_bytes() {
        let err = ImageLoader::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ServiceError::ImageDecode(_)));
    }

    #[test]
    fn rejects_truncated_jpeg_header() {
        // JPEG SOI标记后直接截断
        let err = ImageLoader::from_bytes(&[0xFF, 0xD8, 0xFF]).unwrap_err();
        assert!(matches!(err, ServiceError::ImageDecode(_)));
    }
}
