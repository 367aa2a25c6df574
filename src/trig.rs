use std::fmt;

use crate::error::EvalError;

/// Degrees-vs-radians convention applied to the trig builtins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrigMode {
    #[default]
    Radians,
    Degrees,
}

impl TrigMode {
    /// Parses `"rad"` or `"deg"`, any letter case.
    pub fn parse(s: &str) -> Result<Self, EvalError> {
        match s.to_ascii_lowercase().as_str() {
            "rad" => Ok(TrigMode::Radians),
            "deg" => Ok(TrigMode::Degrees),
            _ => Err(EvalError::InvalidMode(s.to_string())),
        }
    }

    /// Switches the mode. An invalid string leaves the mode unchanged.
    pub fn set(&mut self, s: &str) -> Result<(), EvalError> {
        *self = Self::parse(s)?;
        Ok(())
    }

    /// Wraps a forward trig primitive so its input respects the mode:
    /// degrees are converted to radians before the primitive runs.
    pub(crate) fn wrap_forward(self, f: fn(f64) -> f64) -> impl Fn(f64) -> f64 {
        move |x| match self {
            TrigMode::Radians => f(x),
            TrigMode::Degrees => f(x.to_radians()),
        }
    }

    /// Wraps an inverse trig primitive so its output respects the mode:
    /// the primitive's radian result is converted to degrees.
    pub(crate) fn wrap_inverse(self, f: fn(f64) -> f64) -> impl Fn(f64) -> f64 {
        move |x| match self {
            TrigMode::Radians => f(x),
            TrigMode::Degrees => f(x).to_degrees(),
        }
    }
}

impl fmt::Display for TrigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigMode::Radians => write!(f, "rad"),
            TrigMode::Degrees => write!(f, "deg"),
        }
    }
}
