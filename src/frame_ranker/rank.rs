use crate::action_vocabulary::ActionVocabulary;
use crate::error::Error;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledScore {
    pub class_index: usize,
    pub probability: f32,
}

/// Top-k entries of one frame, highest probability first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedFrame {
    pub scores: Vec<LabeledScore>,
}

impl RankedFrame {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn top(&self) -> Option<&LabeledScore> {
        self.scores.first()
    }

    /// One `"<label>: <probability>"` line per entry. Indices outside the
    /// vocabulary fall back to `#<index>`.
    pub fn describe(&self, vocabulary: &ActionVocabulary) -> Vec<String> {
        self.scores
            .iter()
            .map(|score| match vocabulary.label(score.class_index) {
                Some(label) => format!("{}: {:.3}", label, score.probability),
                None => format!("#{}: {:.3}", score.class_index, score.probability),
            })
            .collect()
    }
}

// Descending probability, ascending index on ties. NaN is rejected before
// sorting, so `partial_cmp` is total here and `-0.0` ties with `0.0`.
fn by_rank(probabilities: &[f32]) -> impl Fn(&usize, &usize) -> Ordering + '_ {
    move |a, b| {
        probabilities[*b]
            .partial_cmp(&probabilities[*a])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(b))
    }
}

pub fn rank(probabilities: &[f32], k: usize) -> Result<RankedFrame, Error> {
    if probabilities.is_empty() {
        return Err(Error::InvalidArgument(
            "probability vector is empty".to_string(),
        ));
    }
    if k == 0 {
        return Err(Error::InvalidArgument("k must be at least 1".to_string()));
    }
    if let Some(index) = probabilities.iter().position(|p| p.is_nan()) {
        return Err(Error::InvalidArgument(format!(
            "probability at class {} is NaN",
            index
        )));
    }

    let compare = by_rank(probabilities);
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();

    if k < indices.len() {
        indices.select_nth_unstable_by(k - 1, &compare);
        indices.truncate(k);
    }
    indices.sort_unstable_by(&compare);

    let scores = indices
        .into_iter()
        .map(|class_index| LabeledScore {
            class_index,
            probability: probabilities[class_index],
        })
        .collect();

    Ok(RankedFrame { scores })
}
