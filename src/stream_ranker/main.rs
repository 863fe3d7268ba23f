use crate::action_vocabulary::ActionVocabulary;
use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::prediction_display::interface::PredictionDisplay;
use crate::streaming_classifier::interface::StreamingClassifier;
use crate::video_decoder::interface::VideoDecoder;
use std::sync::{Arc, Mutex};

/// Decodes a clip, steps the classifier once per frame and ranks its output.
#[derive(Clone)]
pub struct StreamRanker {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub vocabulary: Arc<ActionVocabulary>,
    pub video_decoder: Arc<dyn VideoDecoder + Send + Sync>,
    pub classifier: Arc<dyn StreamingClassifier + Send + Sync>,
    pub display: Arc<Mutex<dyn PredictionDisplay + Send + Sync>>,
}

impl StreamRanker {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        vocabulary: Arc<ActionVocabulary>,
        video_decoder: Arc<dyn VideoDecoder + Send + Sync>,
        classifier: Arc<dyn StreamingClassifier + Send + Sync>,
        display: Arc<Mutex<dyn PredictionDisplay + Send + Sync>>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("stream"),
            vocabulary,
            video_decoder,
            classifier,
            display,
        }
    }
}
