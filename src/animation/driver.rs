use crate::{
    foundation::core::{DVec3, validate_finite3},
    foundation::error::{ArticulateError, ArticulateResult},
    transform::Transform,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Periodic waveform driving a joint.
pub enum Wave {
    /// `sin(x)`: zero at phase 0.
    #[default]
    Sin,
    /// `cos(x)`: peak at phase 0.
    Cos,
}

impl Wave {
    /// Evaluate the waveform at `x` radians.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
        }
    }
}

fn default_frequency() -> f64 {
    1.0
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Phase-dependent local joint motion of a body part.
///
/// Drivers are pure functions of the phase: sampling twice with the same phase
/// yields the same transform.
pub enum JointDriver {
    /// Rigid joint.
    #[default]
    Identity,
    /// Vertical bob: `translation(0, amplitude * sin(frequency * phase), 0)`.
    Bob {
        /// Peak displacement along Y.
        amplitude: f64,
        /// Angular multiplier on the phase.
        #[serde(default = "default_frequency")]
        frequency: f64,
    },
    /// Oscillating rotation: `rotation(amplitude_deg * wave(frequency * phase), axis)`.
    Swing {
        /// Peak angle in degrees; the sign picks the direction.
        amplitude_deg: f64,
        /// Rotation axis; normalized when sampled.
        axis: [f64; 3],
        /// Waveform shaping the swing.
        #[serde(default)]
        wave: Wave,
        /// Angular multiplier on the phase.
        #[serde(default = "default_frequency")]
        frequency: f64,
    },
    /// Product of drivers, left to right.
    Chain {
        /// Drivers multiplied in order.
        drivers: Vec<JointDriver>,
    },
}

impl JointDriver {
    /// Shorthand for [`JointDriver::Bob`].
    pub fn bob(amplitude: f64, frequency: f64) -> Self {
        Self::Bob {
            amplitude,
            frequency,
        }
    }

    /// Shorthand for [`JointDriver::Swing`] at frequency 1.
    pub fn swing(amplitude_deg: f64, axis: [f64; 3], wave: Wave) -> Self {
        Self::Swing {
            amplitude_deg,
            axis,
            wave,
            frequency: 1.0,
        }
    }

    /// Shorthand for [`JointDriver::Chain`].
    pub fn chain(drivers: impl IntoIterator<Item = JointDriver>) -> Self {
        Self::Chain {
            drivers: drivers.into_iter().collect(),
        }
    }

    /// Local joint transform at `phase`.
    pub fn sample(&self, phase: f64) -> Transform {
        match self {
            Self::Identity => Transform::IDENTITY,
            Self::Bob {
                amplitude,
                frequency,
            } => Transform::translation(DVec3::new(
                0.0,
                amplitude * (frequency * phase).sin(),
                0.0,
            )),
            Self::Swing { axis, .. } => Transform::rotation(
                self.angle_deg(phase).unwrap_or_default(),
                DVec3::from_array(*axis),
            ),
            Self::Chain { drivers } => drivers
                .iter()
                .fold(Transform::IDENTITY, |acc, d| acc * d.sample(phase)),
        }
    }

    /// Swing angle in degrees at `phase`; the first swing found for chains.
    pub fn angle_deg(&self, phase: f64) -> Option<f64> {
        match self {
            Self::Swing {
                amplitude_deg,
                wave,
                frequency,
                ..
            } => Some(amplitude_deg * wave.eval(frequency * phase)),
            Self::Chain { drivers } => drivers.iter().find_map(|d| d.angle_deg(phase)),
            Self::Identity | Self::Bob { .. } => None,
        }
    }

    /// Vertical bob offset at `phase`; the sum over chains.
    pub fn bob_offset(&self, phase: f64) -> Option<f64> {
        match self {
            Self::Bob {
                amplitude,
                frequency,
            } => Some(amplitude * (frequency * phase).sin()),
            Self::Chain { drivers } => drivers
                .iter()
                .filter_map(|d| d.bob_offset(phase))
                .reduce(|a, b| a + b),
            Self::Identity | Self::Swing { .. } => None,
        }
    }

    /// Check amplitudes, frequencies and axes are usable. `field` prefixes messages.
    pub fn validate(&self, field: &str) -> ArticulateResult<()> {
        match self {
            Self::Identity => Ok(()),
            Self::Bob {
                amplitude,
                frequency,
            } => {
                if !amplitude.is_finite() || !frequency.is_finite() {
                    return Err(ArticulateError::validation(format!(
                        "{field} bob amplitude/frequency must be finite"
                    )));
                }
                Ok(())
            }
            Self::Swing {
                amplitude_deg,
                axis,
                frequency,
                ..
            } => {
                if !amplitude_deg.is_finite() || !frequency.is_finite() {
                    return Err(ArticulateError::validation(format!(
                        "{field} swing amplitude_deg/frequency must be finite"
                    )));
                }
                validate_axis(*axis, &format!("{field} swing axis"))
            }
            Self::Chain { drivers } => {
                for (i, d) in drivers.iter().enumerate() {
                    d.validate(&format!("{field}[{i}]"))?;
                }
                Ok(())
            }
        }
    }
}

/// Rotation axes must be finite and non-zero.
pub(crate) fn validate_axis(axis: [f64; 3], field: &str) -> ArticulateResult<()> {
    validate_finite3(axis, field)?;
    if DVec3::from_array(axis).length_squared() == 0.0 {
        return Err(ArticulateError::validation(format!(
            "{field} must be non-zero"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
