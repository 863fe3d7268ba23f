#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// (height, width) of a single frame fed to the model.
    pub input_shape: (u32, u32),
}
