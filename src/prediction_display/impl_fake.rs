use crate::prediction_display::interface::PredictionDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayedFrame {
    pub frame_index: usize,
    pub lines: Vec<String>,
}

/// Records everything it is asked to show.
#[derive(Clone, Default)]
pub struct PredictionDisplayFake {
    pub frames: Arc<Mutex<Vec<DisplayedFrame>>>,
    pub finished: Arc<Mutex<Option<Vec<String>>>>,
    pub waited: Arc<Mutex<bool>>,
}

impl PredictionDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PredictionDisplay for PredictionDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, frame_index: usize, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .map_err(|e| e.to_string())?
            .push(DisplayedFrame {
                frame_index,
                lines: lines.to_vec(),
            });
        Ok(())
    }

    fn finish(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.finished.lock().map_err(|e| e.to_string())? = Some(lines.to_vec());
        Ok(())
    }

    fn wait(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.waited.lock().map_err(|e| e.to_string())? = true;
        Ok(())
    }
}
