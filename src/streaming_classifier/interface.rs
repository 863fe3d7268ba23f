use crate::streaming_classifier::preprocess::NormalizedFrame;

#[derive(Debug, Clone, PartialEq)]
pub struct StateTensor {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl StateTensor {
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }
}

/// Recurrent state carried from one frame to the next. Callers never look
/// inside; they hand the state from one `step` back into the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamState {
    tensors: Vec<StateTensor>,
}

impl StreamState {
    pub fn new(tensors: Vec<StateTensor>) -> Self {
        Self { tensors }
    }

    pub fn into_tensors(self) -> Vec<StateTensor> {
        self.tensors
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreamStep {
    pub logits: Vec<f32>,
    pub state: StreamState,
}

/// `[batch, frames, height, width, channels]`
pub type InputShape = [usize; 5];

pub trait StreamingClassifier {
    fn num_classes(&self) -> usize;

    fn init_state(
        &self,
        input_shape: InputShape,
    ) -> Result<StreamState, Box<dyn std::error::Error + Send + Sync>>;

    /// Consumes the previous state and returns the next one with this frame's logits.
    fn step(
        &self,
        state: StreamState,
        frame: &NormalizedFrame,
    ) -> Result<StreamStep, Box<dyn std::error::Error + Send + Sync>>;
}
