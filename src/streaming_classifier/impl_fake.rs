use crate::error::Error;
use crate::library::logger::interface::Logger;
use crate::streaming_classifier::interface::{
    InputShape, StateTensor, StreamState, StreamStep, StreamingClassifier,
};
use crate::streaming_classifier::preprocess::NormalizedFrame;
use std::sync::Arc;

/// Deterministic stand-in for a real model. The state counts the frames seen
/// so far and the strongest logit walks one class forward per frame.
pub struct StreamingClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    num_classes: usize,
}

impl StreamingClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, num_classes: usize) -> Self {
        Self {
            logger: logger
                .with_namespace("streaming_classifier")
                .with_namespace("fake"),
            num_classes,
        }
    }
}

impl StreamingClassifier for StreamingClassifierFake {
    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn init_state(
        &self,
        input_shape: InputShape,
    ) -> Result<StreamState, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Initializing state for input {:?}", input_shape))?;
        Ok(StreamState::new(vec![StateTensor::zeros(vec![1])]))
    }

    fn step(
        &self,
        state: StreamState,
        _frame: &NormalizedFrame,
    ) -> Result<StreamStep, Box<dyn std::error::Error + Send + Sync>> {
        if state.len() != 1 {
            return Err(Error::StateMismatch {
                expected: 1,
                actual: state.len(),
            }
            .into());
        }
        if self.num_classes == 0 {
            return Err(Error::InvalidArgument("classifier has no classes".to_string()).into());
        }

        let mut counter = state.into_tensors().remove(0);
        let frames_seen = match counter.data.first() {
            Some(&value) => value as usize,
            None => {
                return Err(Error::InvalidArgument("frame counter is empty".to_string()).into())
            }
        };

        let favored = frames_seen % self.num_classes;
        let mut logits = vec![0.0; self.num_classes];
        logits[(favored + 1) % self.num_classes] = 2.0;
        logits[favored] = 4.0;

        counter.data[0] += 1.0;

        Ok(StreamStep {
            logits,
            state: StreamState::new(vec![counter]),
        })
    }
}
