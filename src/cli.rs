use crate::config::Config;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayKind {
    Console,
    Gui,
}

/// Streams a clip through an action classifier and prints the top labels per frame.
#[derive(Debug, Parser)]
#[command(name = "action-stream", version)]
pub struct Args {
    /// Animated GIF to classify.
    pub video: PathBuf,

    /// Streaming ONNX model. Without it the fake classifier is used.
    #[arg(long, requires = "labels")]
    pub model: Option<PathBuf>,

    /// Label file, one class name per line, in model output order.
    #[arg(long)]
    pub labels: Option<PathBuf>,

    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub top_k: Option<usize>,

    /// Square frame size fed to the model.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    #[arg(long)]
    pub max_frames: Option<usize>,

    #[arg(long, value_enum, default_value_t = DisplayKind::Console)]
    pub display: DisplayKind,

    /// Run on fakes only: noise frames and the fake classifier.
    #[arg(long, conflicts_with = "model")]
    pub fake: bool,
}

impl Args {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        if let Some(size) = self.size {
            config.input_shape = (size, size);
        }
        if self.max_frames.is_some() {
            config.max_frames = self.max_frames;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "action-stream",
            "clip.gif",
            "--top-k",
            "3",
            "--size",
            "224",
            "--max-frames",
            "10",
        ]);

        let config = args.apply(Config::default());
        assert_eq!(config.top_k, 3);
        assert_eq!(config.input_shape, (224, 224));
        assert_eq!(config.max_frames, Some(10));
        assert_eq!(args.display, DisplayKind::Console);
    }

    #[test]
    fn test_zero_top_k_and_size_are_rejected() {
        assert!(Args::try_parse_from(["action-stream", "clip.gif", "--top-k", "0"]).is_err());
        assert!(Args::try_parse_from(["action-stream", "clip.gif", "--size", "0"]).is_err());

        let args = Args::try_parse_from(["action-stream", "clip.gif", "--top-k", "1"]).unwrap();
        assert_eq!(args.top_k, Some(1));
    }

    #[test]
    fn test_fake_excludes_model() {
        let args = Args::try_parse_from(["action-stream", "clip.gif", "--fake"]).unwrap();
        assert!(args.fake);
        assert_eq!(args.model, None);

        let result = Args::try_parse_from([
            "action-stream",
            "clip.gif",
            "--fake",
            "--model",
            "a0.onnx",
            "--labels",
            "kinetics_600.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_model_requires_labels() {
        let result = Args::try_parse_from(["action-stream", "clip.gif", "--model", "a0.onnx"]);
        assert!(result.is_err());
    }
}
