use crate::error::Error;
use crate::library::logger::interface::Logger;
use crate::video_decoder::interface::{Frame, FrameStream, VideoDecoder};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Decodes animated GIF clips. Every frame is composited onto the full
/// canvas, so all frames share the same size.
pub struct VideoDecoderGif {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl VideoDecoderGif {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("video_decoder").with_namespace("gif"),
        }
    }
}

impl VideoDecoder for VideoDecoderGif {
    fn decode(&self, path: &Path) -> Result<FrameStream, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Opening {}", path.display()))?;

        let file = File::open(path)
            .map_err(|e| Error::Decode(format!("{}: {}", path.display(), e)))?;

        let decoder = GifDecoder::new(BufReader::new(file))
            .map_err(|e| Error::Decode(format!("{}: {}", path.display(), e)))?;

        let frames = decoder.into_frames().map(
            |frame| -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
                let frame = frame.map_err(|e| Error::Decode(e.to_string()))?;
                Ok(DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8())
            },
        );

        Ok(Box::new(frames))
    }
}
