use action_vocabulary::ActionVocabulary;
use clap::Parser;
use cli::{Args, DisplayKind};
use config::Config;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use prediction_display::{
    impl_console::PredictionDisplayConsole, impl_gui::PredictionDisplayGui,
    interface::PredictionDisplay,
};
use std::sync::{Arc, Mutex};
use stream_ranker::main::StreamRanker;
use streaming_classifier::{
    impl_fake::StreamingClassifierFake, impl_tract_onnx::StreamingClassifierTractOnnx,
    interface::StreamingClassifier, model_config::ModelConfig,
};
use video_decoder::{
    impl_fake::VideoDecoderFake, impl_gif::VideoDecoderGif, interface::VideoDecoder,
};

mod action_vocabulary;
mod cli;
mod config;
mod error;
mod frame_ranker;
mod library;
mod prediction_display;
mod stream_ranker;
mod streaming_classifier;
mod video_decoder;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = args.apply(Config::default());

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let video_decoder: Arc<dyn VideoDecoder + Send + Sync> = if args.fake {
        Arc::new(VideoDecoderFake::new(logger.clone(), config.fake_frame_count))
    } else {
        Arc::new(VideoDecoderGif::new(logger.clone()))
    };

    let (vocabulary, classifier): (ActionVocabulary, Arc<dyn StreamingClassifier + Send + Sync>) =
        match (&args.model, &args.labels) {
            (Some(model), Some(labels)) => {
                let model_config = ModelConfig {
                    onnx_model_path: model.to_string_lossy().to_string(),
                    input_shape: config.input_shape,
                };
                let classifier: Arc<dyn StreamingClassifier + Send + Sync> = Arc::new(
                    StreamingClassifierTractOnnx::new(model_config, logger.clone())?,
                );
                (ActionVocabulary::from_file(labels)?, classifier)
            }
            _ => {
                let vocabulary = match &args.labels {
                    Some(labels) => ActionVocabulary::from_file(labels)?,
                    None => ActionVocabulary::demo(),
                };
                let classifier: Arc<dyn StreamingClassifier + Send + Sync> = Arc::new(
                    StreamingClassifierFake::new(logger.clone(), vocabulary.len()),
                );
                (vocabulary, classifier)
            }
        };

    logger.info(&format!("Loaded {} action labels", vocabulary.len()))?;

    let display: Arc<Mutex<dyn PredictionDisplay + Send + Sync>> = match args.display {
        DisplayKind::Console => Arc::new(Mutex::new(PredictionDisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(PredictionDisplayGui::new())),
    };

    let stream_ranker = StreamRanker::new(
        config,
        logger.clone(),
        Arc::new(vocabulary),
        video_decoder,
        classifier,
        display,
    );

    if let Err(e) = stream_ranker.run(&args.video) {
        logger.error(&e.to_string())?;
        return Err(e);
    }

    // The GUI window stays up until the user closes it.
    if let Err(e) = stream_ranker.wait() {
        logger.error(&e.to_string())?;
        return Err(e);
    }

    Ok(())
}
