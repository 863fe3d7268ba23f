use crate::error::Error;

/// Max-subtracted softmax over a single logit vector.
pub fn softmax(logits: &[f32]) -> Result<Vec<f32>, Error> {
    if logits.is_empty() {
        return Err(Error::InvalidArgument("logits are empty".to_string()));
    }

    if let Some(index) = logits.iter().position(|v| !v.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "logit at class {} is not finite ({})",
            index, logits[index]
        )));
    }

    let max_val = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let exps: Vec<f32> = logits.iter().map(|&v| (v - max_val).exp()).collect();
    let sum_exp: f32 = exps.iter().sum();

    let inv_sum = 1.0f32 / sum_exp.max(1e-12);
    Ok(exps.into_iter().map(|e| e * inv_sum).collect())
}
