use crate::library::logger::interface::Logger;
use crate::video_decoder::interface::{Frame, FrameStream, VideoDecoder};
use image::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;

/// Yields `frame_count` frames of random noise, whatever the path.
pub struct VideoDecoderFake {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_count: usize,
    width: u32,
    height: u32,
    seed: u64,
}

impl VideoDecoderFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, frame_count: usize) -> Self {
        Self {
            logger: logger.with_namespace("video_decoder").with_namespace("fake"),
            frame_count,
            width: 64,
            height: 48,
            seed: 0,
        }
    }

    #[allow(dead_code)]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[allow(dead_code)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl VideoDecoder for VideoDecoderFake {
    fn decode(&self, path: &Path) -> Result<FrameStream, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Generating {} frames for {}",
            self.frame_count,
            path.display()
        ))?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let (width, height) = (self.width, self.height);

        let frames = (0..self.frame_count).map(move |_| {
            let frame = Frame::from_fn(width, height, |_, _| {
                Rgb([rng.random(), rng.random(), rng.random()])
            });
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(frame)
        });

        Ok(Box::new(frames))
    }
}
