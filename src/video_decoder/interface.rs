use image::RgbImage;
use std::path::Path;

pub type Frame = RgbImage;

/// Lazy, finite and single-pass. Dropping it stops decoding.
pub type FrameStream =
    Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error + Send + Sync>>>>;

pub trait VideoDecoder {
    fn decode(&self, path: &Path) -> Result<FrameStream, Box<dyn std::error::Error + Send + Sync>>;
}
