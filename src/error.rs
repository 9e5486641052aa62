use std::fmt;

/// All errors the perceptron and topology APIs can return.
///
/// Every variant is a usage error detected before any state is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum KisnnError {
    /// Weights were given in a shape that is neither absent, a scalar nor a list of numbers.
    InvalidWeightSpec(String),
    /// An explicit weight list does not have one entry per input.
    WeightCountMismatch { expected: usize, actual: usize },
    /// An input vector does not match the perceptron's fan-in.
    InputCountMismatch { expected: usize, actual: usize },
    /// A per-stage width list does not have one entry per hidden stage.
    StageWidthCountMismatch { expected: usize, actual: usize },
    /// An activation tag or name that maps to no known function.
    InvalidActivationKind(String),
    /// A perceptron was asked to accept zero inputs.
    ZeroInputCount,
    /// A multilayer network was declared without hidden stages.
    NoHiddenStages,
    /// Training samples and answers have different lengths.
    SampleCountMismatch { inputs: usize, answers: usize },
}

impl fmt::Display for KisnnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeightSpec(msg) => write!(f, "invalid weight spec: {msg}"),
            Self::WeightCountMismatch { expected, actual } => {
                write!(f, "weights has {actual} values, expected {expected}")
            }
            Self::InputCountMismatch { expected, actual } => {
                write!(f, "inputs has {actual} values, expected {expected}")
            }
            Self::StageWidthCountMismatch { expected, actual } => write!(
                f,
                "list of hidden layer number of perceptrons has {actual} values, expected {expected}"
            ),
            Self::InvalidActivationKind(what) => write!(f, "invalid activation type: {what}"),
            Self::ZeroInputCount => write!(f, "a perceptron needs at least one input"),
            Self::NoHiddenStages => write!(f, "a multilayer perceptron needs at least one hidden layer"),
            Self::SampleCountMismatch { inputs, answers } => {
                write!(f, "got {inputs} input samples but {answers} answers")
            }
        }
    }
}

impl std::error::Error for KisnnError {}

pub type Result<T> = std::result::Result<T, KisnnError>;
