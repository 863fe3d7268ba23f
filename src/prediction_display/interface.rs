use std::error::Error;

/// Where the ranked labels of each frame end up.
pub trait PredictionDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Shows the described top-k lines of one frame.
    fn show(&mut self, frame_index: usize, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Called once the stream is exhausted, with the last frame's lines.
    fn finish(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Blocks until the user is done looking, for displays that outlive the stream.
    fn wait(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
