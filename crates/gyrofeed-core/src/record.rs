//! The sensor record delivered by both channels.

use core::fmt;

use gyrofeed_errors::{FeedError, Result};
use serde::{Deserialize, Serialize};

/// One 3-axis sensor sample.
///
/// There is no timestamp; records are ordered only by the order in which they
/// are handed to a channel. Values are `f32` because the downstream reader
/// stores them as `float` entries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SensorRecord {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Axis names paired with their values, in wire order.
    pub fn axes(&self) -> [(&'static str, f32); 3] {
        [("x", self.x), ("y", self.y), ("z", self.z)]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Reject records carrying NaN or infinite components.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NonFiniteRecord`] naming the first offending axis.
    pub fn ensure_finite(&self) -> Result<()> {
        match self.axes().into_iter().find(|(_, value)| !value.is_finite()) {
            Some((axis, value)) => Err(FeedError::NonFiniteRecord { axis, value }),
            None => Ok(()),
        }
    }
}

impl From<[f32; 3]> for SensorRecord {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f32, f32, f32)> for SensorRecord {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for SensorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={}, Y={}, Z={}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_finite_record_passes() -> TestResult {
        SensorRecord::new(1.0, 2.5, -0.5).ensure_finite()?;
        Ok(())
    }

    #[test]
    fn test_first_non_finite_axis_is_reported() -> TestResult {
        let record = SensorRecord::new(0.0, f32::NAN, f32::INFINITY);
        assert!(!record.is_finite());
        match record.ensure_finite() {
            Err(FeedError::NonFiniteRecord { axis, value }) => {
                assert_eq!(axis, "y");
                assert!(value.is_nan());
            }
            other => return Err(format!("expected NonFiniteRecord, got {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn test_conversions_keep_axis_order() -> TestResult {
        let from_array = SensorRecord::from([1.0, 2.0, 3.0]);
        let from_tuple = SensorRecord::from((1.0, 2.0, 3.0));
        assert_eq!(from_array, from_tuple);
        assert_eq!(from_array.axes().map(|(name, _)| name), ["x", "y", "z"]);
        Ok(())
    }

    #[test]
    fn test_display() -> TestResult {
        assert_eq!(
            SensorRecord::new(1.0, 2.5, -0.5).to_string(),
            "X=1, Y=2.5, Z=-0.5"
        );
        Ok(())
    }
}
