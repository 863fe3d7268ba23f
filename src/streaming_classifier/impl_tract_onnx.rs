use crate::error::Error;
use crate::library::logger::interface::Logger;
use crate::streaming_classifier::interface::{
    InputShape, StateTensor, StreamState, StreamStep, StreamingClassifier,
};
use crate::streaming_classifier::model_config::ModelConfig;
use crate::streaming_classifier::preprocess::NormalizedFrame;
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::*;
use tract_onnx::tract_hir::infer::Factoid;
use tract_onnx::tract_hir::internal::DimLike;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// A plan built for one input shape, with the state shapes it expects.
struct Prepared {
    input_shape: InputShape,
    plan: Plan,
    state_shapes: Vec<Vec<usize>>,
    num_classes: usize,
}

/// Streaming ONNX model run with tract.
///
/// Input 0 takes one frame as `[batch, 1, height, width, 3]`, the remaining
/// inputs take the recurrent state. Output 0 holds the logits, the remaining
/// outputs the next state, in the same order as the state inputs.
///
/// State inputs may leave their leading (batch) axis symbolic; it is fixed
/// from the input shape handed to `init_state`, which rebuilds the plan when
/// that shape changes.
pub struct StreamingClassifierTractOnnx {
    model: InferenceModel,
    declared_states: Vec<Vec<Option<usize>>>,
    prepared: Mutex<Prepared>,
    num_classes: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl StreamingClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger
            .with_namespace("streaming_classifier")
            .with_namespace("tract_onnx");
        logger.info(&format!("Loading model {}", config.onnx_model_path))?;

        let model = tract_onnx::onnx().model_for_path(&config.onnx_model_path)?;

        let mut declared_states = Vec::new();
        for ix in 1..model.inputs.len() {
            let dims = model.input_fact(ix)?.shape.concretize().ok_or_else(|| {
                Error::InvalidArgument(format!("state input {} has no declared shape", ix - 1))
            })?;
            declared_states.push(dims.iter().map(|dim| dim.to_usize().ok()).collect());
        }

        let (height, width) = config.input_shape;
        let prepared = prepare(
            &model,
            &declared_states,
            [1, 1, height as usize, width as usize, 3],
        )?;
        let num_classes = prepared.num_classes;

        logger.info(&format!(
            "Model ready: {} classes, {} state tensors",
            num_classes,
            prepared.state_shapes.len()
        ))?;

        Ok(Self {
            model,
            declared_states,
            prepared: Mutex::new(prepared),
            num_classes,
            logger,
        })
    }
}

fn prepare(
    model: &InferenceModel,
    declared_states: &[Vec<Option<usize>>],
    input_shape: InputShape,
) -> Result<Prepared, Box<dyn std::error::Error + Send + Sync>> {
    let state_shapes = declared_states
        .iter()
        .enumerate()
        .map(|(ix, declared)| resolve_state_shape(ix, declared, input_shape))
        .collect::<Result<Vec<_>, _>>()?;

    let mut model = model
        .clone()
        .with_input_fact(0, f32::fact(input_shape).into())?;
    for (ix, shape) in state_shapes.iter().enumerate() {
        model = model.with_input_fact(ix + 1, f32::fact(shape.clone()).into())?;
    }
    let plan = model.into_optimized()?.into_runnable()?;

    let num_classes = plan
        .model()
        .output_fact(0)?
        .shape
        .as_concrete()
        .and_then(|shape| shape.last().copied())
        .ok_or_else(|| Error::InvalidArgument("logits have a symbolic shape".to_string()))?;

    Ok(Prepared {
        input_shape,
        plan,
        state_shapes,
        num_classes,
    })
}

/// Fixes the dimensions a state input leaves open. Only the leading axis may
/// be open; it takes the batch size of `input_shape`.
fn resolve_state_shape(
    state_index: usize,
    declared: &[Option<usize>],
    input_shape: InputShape,
) -> Result<Vec<usize>, Error> {
    declared
        .iter()
        .enumerate()
        .map(|(axis, dim)| match (axis, dim) {
            (_, Some(dim)) => Ok(*dim),
            (0, None) => Ok(input_shape[0]),
            (axis, None) => Err(Error::InvalidArgument(format!(
                "state input {} has a symbolic dimension at axis {}",
                state_index, axis
            ))),
        })
        .collect()
}

/// Output 0 is the logits, the rest is the next state.
fn split_outputs(
    outputs: TVec<TValue>,
    expected_states: usize,
) -> Result<StreamStep, Box<dyn std::error::Error + Send + Sync>> {
    if outputs.len() < 2 {
        return Err(Error::MissingState {
            outputs: outputs.len(),
        }
        .into());
    }
    if outputs.len() - 1 != expected_states {
        return Err(Error::StateMismatch {
            expected: expected_states,
            actual: outputs.len() - 1,
        }
        .into());
    }

    let logits = outputs[0].to_array_view::<f32>()?.iter().copied().collect();

    let mut next = Vec::with_capacity(expected_states);
    for output in outputs.iter().skip(1) {
        let view = output.to_array_view::<f32>()?;
        next.push(StateTensor {
            shape: view.shape().to_vec(),
            data: view.iter().copied().collect(),
        });
    }

    Ok(StreamStep {
        logits,
        state: StreamState::new(next),
    })
}

impl StreamingClassifier for StreamingClassifierTractOnnx {
    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn init_state(
        &self,
        input_shape: InputShape,
    ) -> Result<StreamState, Box<dyn std::error::Error + Send + Sync>> {
        let mut prepared = self.prepared.lock().map_err(|e| e.to_string())?;

        if prepared.input_shape != input_shape {
            self.logger
                .info(&format!("Rebuilding plan for input {:?}", input_shape))?;
            *prepared = prepare(&self.model, &self.declared_states, input_shape)?;
        }

        self.logger.info(&format!(
            "Initializing {} state tensors",
            prepared.state_shapes.len()
        ))?;

        Ok(StreamState::new(
            prepared
                .state_shapes
                .iter()
                .cloned()
                .map(StateTensor::zeros)
                .collect(),
        ))
    }

    fn step(
        &self,
        state: StreamState,
        frame: &NormalizedFrame,
    ) -> Result<StreamStep, Box<dyn std::error::Error + Send + Sync>> {
        let prepared = self.prepared.lock().map_err(|e| e.to_string())?;

        if state.len() != prepared.state_shapes.len() {
            return Err(Error::StateMismatch {
                expected: prepared.state_shapes.len(),
                actual: state.len(),
            }
            .into());
        }

        let [batch, frames, height, width, channels] = prepared.input_shape;
        if frame.shape() != [height, width, channels] {
            return Err(Error::InvalidArgument(format!(
                "frame is {:?}, model was prepared for {:?}",
                frame.shape(),
                [height, width, channels]
            ))
            .into());
        }

        let mut inputs: TVec<TValue> = tvec!(Tensor::from_shape::<f32>(
            &[batch, frames, height, width, channels],
            &frame.data
        )?
        .into_tvalue());
        for tensor in state.into_tensors() {
            inputs.push(Tensor::from_shape::<f32>(&tensor.shape, &tensor.data)?.into_tvalue());
        }

        let outputs = prepared.plan.run(inputs)?;

        split_outputs(outputs, prepared.state_shapes.len())
    }
}
