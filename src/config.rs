#[derive(Debug, Clone)]
pub struct Config {
    pub top_k: usize,
    /// (height, width) every frame is resized to before classification.
    pub input_shape: (u32, u32),
    pub max_frames: Option<usize>,
    pub fake_frame_count: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: 5,
            // MoViNet-A0 stream resolution.
            input_shape: (172, 172),
            max_frames: None,
            fake_frame_count: 13,
            logger_timezone: local_offset(),
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
