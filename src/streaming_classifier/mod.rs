pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod model_config;
pub mod preprocess;
