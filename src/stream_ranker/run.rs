use super::main::StreamRanker;
use crate::frame_ranker::{rank, softmax, RankedFrame};
use crate::streaming_classifier::preprocess::normalize_frame;
use crate::video_decoder::interface::FrameStream;
use std::path::Path;

impl StreamRanker {
    /// Ranks every decoded frame, in decode order. The first failing frame
    /// stops the stream and its error is returned as is.
    pub fn run(
        &self,
        path: &Path,
    ) -> Result<Vec<RankedFrame>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;

        self.vocabulary
            .ensure_matches(self.classifier.num_classes())?;

        // Frames past the limit are never pulled from the decoder.
        let frames: FrameStream = match self.config.max_frames {
            Some(max_frames) => Box::new(self.video_decoder.decode(path)?.take(max_frames)),
            None => self.video_decoder.decode(path)?,
        };

        let mut state = self
            .classifier
            .init_state([1, 1, height as usize, width as usize, 3])?;

        let mut display = self.display.lock().map_err(|e| e.to_string())?;
        display.init()?;

        let mut ranked_frames = Vec::new();

        for (frame_index, frame) in frames.enumerate() {
            let frame = frame?;
            let normalized = normalize_frame(&frame, width, height);

            let step = self.classifier.step(state, &normalized)?;
            state = step.state;

            let probabilities = softmax(&step.logits)?;
            self.vocabulary.ensure_matches(probabilities.len())?;

            let ranked = rank(&probabilities, self.config.top_k)?;
            let lines = ranked.describe(&self.vocabulary);

            self.logger
                .info(&format!("frame {}: {}", frame_index, lines.join(", ")))?;
            display.show(frame_index, &lines)?;

            ranked_frames.push(ranked);
        }

        if self.config.max_frames == Some(ranked_frames.len()) {
            self.logger
                .info(&format!("Stopping after {} frames", ranked_frames.len()))?;
        }

        match ranked_frames.last() {
            Some(last) => {
                if let Some(top) = last.top() {
                    self.logger.info(&format!(
                        "clip ({} frames): {}",
                        ranked_frames.len(),
                        self.vocabulary
                            .label(top.class_index)
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("#{}", top.class_index))
                    ))?;
                }
                display.finish(&last.describe(&self.vocabulary))?;
            }
            None => {
                self.logger.error(&format!("No frames decoded from {}", path.display()))?;
            }
        }

        Ok(ranked_frames)
    }

    /// Blocks until the display is done, e.g. until its window is closed.
    pub fn wait(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut display = self.display.lock().map_err(|e| e.to_string())?;
        display.wait()
    }
}
