use crate::video_decoder::interface::Frame;
use image::{imageops, DynamicImage, RgbImage};

/// Model input for one frame: `height x width x 3`, row-major, values in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl NormalizedFrame {
    pub fn shape(&self) -> [usize; 3] {
        [self.height as usize, self.width as usize, 3]
    }

    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let index = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[index], self.data[index + 1], self.data[index + 2]]
    }
}

/// Fits the frame into `width x height`, keeping the aspect ratio and
/// centering it on black when the frame is not square.
pub fn resize_frame(frame: &Frame, width: u32, height: u32) -> RgbImage {
    if frame.width() == frame.height() {
        return imageops::resize(frame, width, height, imageops::FilterType::Triangle);
    }

    let (w, h) = (frame.width() as f32, frame.height() as f32);
    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = ((w * scale) as u32).clamp(1, width);
    let new_h = ((h * scale) as u32).clamp(1, height);

    let scaled = DynamicImage::ImageRgb8(frame.clone())
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::new(width, height);
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::replace(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    padded
}

pub fn normalize_frame(frame: &Frame, width: u32, height: u32) -> NormalizedFrame {
    let resized = resize_frame(frame, width, height);
    let data = resized
        .as_raw()
        .iter()
        .map(|&value| value as f32 / 255.0)
        .collect();

    NormalizedFrame {
        width,
        height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_square_frame() {
        let frame = RgbImage::from_pixel(100, 100, Rgb([255, 0, 0]));

        let normalized = normalize_frame(&frame, 172, 172);
        assert_eq!(normalized.shape(), [172, 172, 3]);
        assert_eq!(normalized.data.len(), 172 * 172 * 3);

        assert_eq!(normalized.pixel(0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(normalized.pixel(171, 171), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rectangle_frame_is_centered() {
        let frame = RgbImage::from_pixel(200, 100, Rgb([255, 0, 0]));

        let normalized = normalize_frame(&frame, 172, 172);
        assert_eq!(normalized.shape(), [172, 172, 3]);

        // Content in the middle, black padding above.
        assert_eq!(normalized.pixel(86, 86), [1.0, 0.0, 0.0]);
        assert_eq!(normalized.pixel(86, 0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_values_are_scaled() {
        let frame = RgbImage::from_pixel(50, 50, Rgb([128, 128, 128]));

        let normalized = normalize_frame(&frame, 32, 32);
        let expected = 128.0 / 255.0;
        assert!(normalized
            .data
            .iter()
            .all(|value| (value - expected).abs() < 0.01));
    }
}
