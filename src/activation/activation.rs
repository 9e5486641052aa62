use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::str::FromStr;

use crate::error::KisnnError;

/// Scalar activation applied to a perceptron's weighted sum.
///
/// The integer tags match the historical enumeration (1 = identity,
/// 2 = sign, 3 = step, 4 = sigmoid) and are accepted through `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    #[serde(alias = "none")]
    Identity,
    Sign,
    #[default]
    Step,
    Sigmoid,
}

impl ActivationKind {
    pub const ALL: [ActivationKind; 4] = [
        ActivationKind::Identity,
        ActivationKind::Sign,
        ActivationKind::Step,
        ActivationKind::Sigmoid,
    ];

    pub fn activate(&self, x: f64) -> f64 {
        match self {
            ActivationKind::Identity => x,
            ActivationKind::Sign => if x >= 0.0 { 1.0 } else { -1.0 },
            ActivationKind::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationKind::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::Identity => "identity",
            ActivationKind::Sign => "sign",
            ActivationKind::Step => "step",
            ActivationKind::Sigmoid => "sigmoid",
        }
    }
}

/// Free-function form of [`ActivationKind::activate`].
pub fn activate(x: f64, kind: ActivationKind) -> f64 {
    kind.activate(x)
}

impl TryFrom<u8> for ActivationKind {
    type Error = KisnnError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(ActivationKind::Identity),
            2 => Ok(ActivationKind::Sign),
            3 => Ok(ActivationKind::Step),
            4 => Ok(ActivationKind::Sigmoid),
            other => Err(KisnnError::InvalidActivationKind(format!("tag {other}"))),
        }
    }
}

impl FromStr for ActivationKind {
    type Err = KisnnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "none" => Ok(ActivationKind::Identity),
            "sign" => Ok(ActivationKind::Sign),
            "step" => Ok(ActivationKind::Step),
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            _ => Err(KisnnError::InvalidActivationKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_step_treat_zero_as_positive() {
        assert_eq!(activate(0.0, ActivationKind::Sign), 1.0);
        assert_eq!(activate(-0.2, ActivationKind::Sign), -1.0);
        assert_eq!(activate(0.0, ActivationKind::Step), 1.0);
        assert_eq!(activate(-1e-9, ActivationKind::Step), 0.0);
        assert_eq!(activate(3.5, ActivationKind::Step), 1.0);
    }

    #[test]
    fn identity_passes_through() {
        for x in [-2.5, 0.0, 0.222, 17.0] {
            assert_eq!(activate(x, ActivationKind::Identity), x);
        }
    }

    #[test]
    fn sigmoid_is_centered_monotonic_and_bounded() {
        assert_eq!(activate(0.0, ActivationKind::Sigmoid), 0.5);

        let mut prev = 0.0;
        for i in -30..=30 {
            let y = activate(i as f64 * 0.5, ActivationKind::Sigmoid);
            assert!(y > 0.0 && y < 1.0);
            assert!(y > prev);
            prev = y;
        }
    }

    #[test]
    fn historical_tags() {
        assert_eq!(ActivationKind::try_from(1).unwrap(), ActivationKind::Identity);
        assert_eq!(ActivationKind::try_from(4).unwrap(), ActivationKind::Sigmoid);
        assert!(matches!(
            ActivationKind::try_from(0),
            Err(KisnnError::InvalidActivationKind(_))
        ));
        assert!(ActivationKind::try_from(5).is_err());
    }

    #[test]
    fn parses_names() {
        assert_eq!("STEP".parse::<ActivationKind>().unwrap(), ActivationKind::Step);
        assert_eq!("none".parse::<ActivationKind>().unwrap(), ActivationKind::Identity);
        for kind in ActivationKind::ALL {
            assert_eq!(kind.to_string().parse::<ActivationKind>().unwrap(), kind);
        }
        assert!("relu".parse::<ActivationKind>().is_err());
    }

    #[test]
    fn default_is_step() {
        assert_eq!(ActivationKind::default(), ActivationKind::Step);
        let kind: ActivationKind = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(kind, ActivationKind::Identity);
    }
}
