use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vocabulary has {vocabulary} labels but the classifier produced {classes} classes")]
    VocabularyMismatch { vocabulary: usize, classes: usize },

    /// The classifier produced logits without a follow-up state.
    #[error("classifier returned {outputs} output(s), expected logits followed by state")]
    MissingState { outputs: usize },

    #[error("classifier expects {expected} state tensor(s), got {actual}")]
    StateMismatch { expected: usize, actual: usize },

    #[error("decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
