pub mod rank;
pub mod softmax;

pub use rank::{rank, LabeledScore, RankedFrame};
pub use softmax::softmax;
