use serde::{Serialize, Deserialize};

use crate::error::{KisnnError, Result};

/// Width of each hidden stage: one value for every stage, or one per stage.
///
/// Deserializes from either a bare integer or an integer array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageWidths {
    Uniform(usize),
    PerStage(Vec<usize>),
}

impl StageWidths {
    /// Expands to exactly `stage_count` widths.
    pub fn normalize(&self, stage_count: usize) -> Result<Vec<usize>> {
        match self {
            StageWidths::Uniform(width) => Ok(vec![*width; stage_count]),
            StageWidths::PerStage(widths) => {
                if widths.len() != stage_count {
                    return Err(KisnnError::StageWidthCountMismatch {
                        expected: stage_count,
                        actual: widths.len(),
                    });
                }
                Ok(widths.clone())
            }
        }
    }
}

impl From<usize> for StageWidths {
    fn from(width: usize) -> Self {
        StageWidths::Uniform(width)
    }
}

impl From<Vec<usize>> for StageWidths {
    fn from(widths: Vec<usize>) -> Self {
        StageWidths::PerStage(widths)
    }
}

impl From<&[usize]> for StageWidths {
    fn from(widths: &[usize]) -> Self {
        StageWidths::PerStage(widths.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for StageWidths {
    fn from(widths: [usize; N]) -> Self {
        StageWidths::PerStage(widths.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_broadcast() {
        assert_eq!(StageWidths::from(5).normalize(4).unwrap(), vec![5, 5, 5, 5]);
    }

    #[test]
    fn per_stage_length_must_match() {
        assert_eq!(StageWidths::from([5, 6, 2]).normalize(3).unwrap(), vec![5, 6, 2]);
        assert_eq!(
            StageWidths::from(vec![5, 6]).normalize(3),
            Err(KisnnError::StageWidthCountMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn deserializes_both_shapes() {
        let w: StageWidths = serde_json::from_str("4").unwrap();
        assert_eq!(w, StageWidths::Uniform(4));
        let w: StageWidths = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(w, StageWidths::PerStage(vec![1, 2]));
        assert!(serde_json::from_str::<StageWidths>("\"3\"").is_err());
    }
}
