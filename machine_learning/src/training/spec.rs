use std::{
    fmt::{self, Display},
    num::NonZeroUsize,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{MlErr, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_MAX_EPOCHS: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// The perceptron update policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Classical rule, the last weights are the result.
    #[default]
    Naive,
    /// Keeps the most accurate weights seen at the end of any epoch.
    Pocket,
}

impl FromStr for Mode {
    type Err = MlErr;

    /// Accepts the menu numbers `1` and `2` as well as the mode names.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "naive" => Ok(Mode::Naive),
            "2" | "pocket" => Ok(Mode::Pocket),
            other => Err(MlErr::InvalidConfig(format!(
                "unknown training mode '{other}', expected naive (1) or pocket (2)"
            ))),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Naive => write!(f, "naive"),
            Mode::Pocket => write!(f, "pocket"),
        }
    }
}

/// The specification for a `Trainer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerSpec {
    pub mode: Mode,
    pub learning_rate: f64,
    pub max_epochs: NonZeroUsize,
}

impl TrainerSpec {
    /// Checks the spec describes a trainer that can run.
    ///
    /// # Returns
    /// `MlErr::InvalidConfig` if the learning rate is not finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MlErr::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }
}

impl Default for TrainerSpec {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            learning_rate: DEFAULT_LEARNING_RATE,
            max_epochs: DEFAULT_MAX_EPOCHS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_from_menu_numbers_and_names() {
        assert_eq!("1".parse::<Mode>().unwrap(), Mode::Naive);
        assert_eq!(" 2\n".parse::<Mode>().unwrap(), Mode::Pocket);
        assert_eq!("Pocket".parse::<Mode>().unwrap(), Mode::Pocket);
        assert!("3".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn defaults() {
        let spec = TrainerSpec::default();

        assert_eq!(spec.mode, Mode::Naive);
        assert_eq!(spec.learning_rate, 0.1);
        assert_eq!(spec.max_epochs.get(), 100);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn bad_learning_rates_are_rejected() {
        for learning_rate in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let spec = TrainerSpec {
                learning_rate,
                ..Default::default()
            };
            assert!(matches!(spec.validate(), Err(MlErr::InvalidConfig(_))));
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let spec: TrainerSpec = serde_json::from_str(r#"{ "mode": "pocket" }"#).unwrap();

        assert_eq!(spec.mode, Mode::Pocket);
        assert_eq!(spec.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(spec.max_epochs, DEFAULT_MAX_EPOCHS);
    }

    #[test]
    fn zero_epochs_do_not_deserialize() {
        let spec = serde_json::from_str::<TrainerSpec>(r#"{ "max_epochs": 0 }"#);
        assert!(spec.is_err());
    }
}
