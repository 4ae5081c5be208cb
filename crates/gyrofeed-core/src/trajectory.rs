//! Synthetic record producer for continuous streaming.
//!
//! x sweeps forward by `step` and wraps from `bound` to `-bound`; y and z follow
//! `y_amplitude·sin(x)` and `z_amplitude·cos(x)`. The producer never ends and
//! knows nothing about channels; callers pull one record at a time.

use gyrofeed_errors::ValidationError;
use serde::{Deserialize, Serialize};

use crate::record::SensorRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrajectoryParams {
    pub step: f32,
    pub bound: f32,
    pub y_amplitude: f32,
    pub z_amplitude: f32,
}

impl Default for TrajectoryParams {
    fn default() -> Self {
        Self {
            step: 0.1,
            bound: 5.0,
            y_amplitude: 2.0,
            z_amplitude: 1.5,
        }
    }
}

impl TrajectoryParams {
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `step` or `bound` is not a positive
    /// finite number, or an amplitude is not finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("trajectory.step", self.step), ("trajectory.bound", self.bound)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("{value} must be a positive finite number"),
                ));
            }
        }
        for (field, value) in [
            ("trajectory.y_amplitude", self.y_amplitude),
            ("trajectory.z_amplitude", self.z_amplitude),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("{value} must be finite"),
                ));
            }
        }
        Ok(())
    }
}

/// Infinite, restartable sine/cosine sweep.
#[derive(Debug, Clone)]
pub struct SineTrajectory {
    params: TrajectoryParams,
    x: f32,
}

impl SineTrajectory {
    pub fn new(params: TrajectoryParams) -> Self {
        Self { params, x: 0.0 }
    }

    /// Rewind to the initial phase; the next record is the first one again.
    pub fn restart(&mut self) {
        self.x = 0.0;
    }

    pub fn params(&self) -> &TrajectoryParams {
        &self.params
    }
}

impl Default for SineTrajectory {
    fn default() -> Self {
        Self::new(TrajectoryParams::default())
    }
}

impl Iterator for SineTrajectory {
    type Item = SensorRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.x += self.params.step;
        if self.x > self.params.bound {
            self.x = -self.params.bound;
        }

        let x = self.x;
        Some(SensorRecord::new(
            x,
            self.params.y_amplitude * x.sin(),
            self.params.z_amplitude * x.cos(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl core::iter::FusedIterator for SineTrajectory {}
