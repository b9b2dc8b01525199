//
// limits.rs
//
// @date Oct 19 2026
//

use crate::error::ProtocolError;

use clap::ValueEnum;

pub const DEFAULT_MIN: u16 = 0x300;
pub const DEFAULT_MAX: u16 = 0x1200;

/// Calibrated travel range of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    axis: &'static str,
    min: u16,
    max: u16,
}

impl AxisRange {
    pub fn new(axis: &'static str, min: u16, max: u16) -> Result<Self, ProtocolError> {
        if min > max {
            return Err(ProtocolError::InvalidRange { axis, min, max });
        }

        Ok(AxisRange { axis, min, max })
    }

    pub fn axis(&self) -> &'static str {
        self.axis
    }

    pub fn min(&self) -> u16 {
        self.min
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: u16) -> u16 {
        value.clamp(self.min, self.max)
    }

    pub fn midpoint(&self) -> u16 {
        self.min + (self.max - self.min) / 2
    }

    pub fn check(&self, value: u16) -> Result<u16, ProtocolError> {
        if self.contains(value) {
            Ok(value)
        }
        else {
            Err(ProtocolError::OutOfRange { axis: self.axis, value, min: self.min, max: self.max })
        }
    }

    /// Positions from min to max in `step` increments, always ending on max
    pub fn steps(&self, step: u16) -> impl Iterator<Item = u16> {
        let (min, max) = (self.min as u32, self.max as u32);
        let step = step.max(1) as usize;

        (min..max)
            .step_by(step)
            .chain(std::iter::once(max))
            .map(|v| v as u16)
    }
}

/// What to do with positions outside the calibrated range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RangePolicy {
    /// Refuse to send the position
    #[default]
    Reject,
    /// Pull the position back to the nearest bound
    Clamp,
    /// Send the position unchanged
    PassThrough,
}

/// Calibrated ranges for both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub pitch: AxisRange,
    pub yaw: AxisRange,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            pitch: AxisRange { axis: "pitch", min: DEFAULT_MIN, max: DEFAULT_MAX },
            yaw: AxisRange { axis: "yaw", min: DEFAULT_MIN, max: DEFAULT_MAX },
        }
    }
}

impl Calibration {
    pub fn new(pitch: (u16, u16), yaw: (u16, u16)) -> Result<Self, ProtocolError> {
        Ok(Calibration {
            pitch: AxisRange::new("pitch", pitch.0, pitch.1)?,
            yaw: AxisRange::new("yaw", yaw.0, yaw.1)?,
        })
    }

    pub fn center(&self) -> (u16, u16) {
        (self.pitch.midpoint(), self.yaw.midpoint())
    }

    /// Apply `policy` to a requested position
    pub fn apply(&self, policy: RangePolicy, pitch: u16, yaw: u16) -> Result<(u16, u16), ProtocolError> {
        match policy {
            RangePolicy::Reject => Ok((self.pitch.check(pitch)?, self.yaw.check(yaw)?)),
            RangePolicy::Clamp => Ok((self.pitch.clamp(pitch), self.yaw.clamp(yaw))),
            RangePolicy::PassThrough => Ok((pitch, yaw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range() {
        let cal = Calibration::default();
        assert_eq!(cal.pitch.min(), 0x300);
        assert_eq!(cal.yaw.max(), 0x1200);
        assert_eq!(cal.center(), (0xA80, 0xA80));
    }

    #[test]
    fn inverted_range() {
        assert_eq!(
            AxisRange::new("yaw", 0x1000, 0x900),
            Err(ProtocolError::InvalidRange { axis: "yaw", min: 0x1000, max: 0x900 })
        );
    }

    #[test]
    fn reject_policy() {
        let cal = Calibration::default();
        assert_eq!(cal.apply(RangePolicy::Reject, 0x300, 0x1200), Ok((0x300, 0x1200)));
        assert_eq!(
            cal.apply(RangePolicy::Reject, 0x2FF, 0x800),
            Err(ProtocolError::OutOfRange { axis: "pitch", value: 0x2FF, min: 0x300, max: 0x1200 })
        );
        assert_eq!(
            cal.apply(RangePolicy::Reject, 0x800, 0x1201),
            Err(ProtocolError::OutOfRange { axis: "yaw", value: 0x1201, min: 0x300, max: 0x1200 })
        );
    }

    #[test]
    fn clamp_policy() {
        let cal = Calibration::default();
        assert_eq!(cal.apply(RangePolicy::Clamp, 0, 0xFFFF), Ok((0x300, 0x1200)));
        assert_eq!(cal.apply(RangePolicy::Clamp, 0x768, 0xA00), Ok((0x768, 0xA00)));
    }

    #[test]
    fn pass_through_policy() {
        let cal = Calibration::default();
        assert_eq!(cal.apply(RangePolicy::PassThrough, 0, 0xFFFF), Ok((0, 0xFFFF)));
    }

    #[test]
    fn steps_end_on_max() {
        let range = AxisRange::new("pitch", 0x300, 0x320).unwrap();
        let steps: Vec<_> = range.steps(0x10).collect();
        assert_eq!(steps, vec![0x300, 0x310, 0x320]);

        let range = AxisRange::new("pitch", 0x300, 0x325).unwrap();
        let steps: Vec<_> = range.steps(0x10).collect();
        assert_eq!(steps, vec![0x300, 0x310, 0x320, 0x325]);
    }

    #[test]
    fn steps_of_single_point_range() {
        let range = AxisRange::new("yaw", 0x500, 0x500).unwrap();
        assert_eq!(range.steps(0).collect::<Vec<_>>(), vec![0x500]);
    }
}
