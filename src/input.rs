use crate::error::{Error, Result};
use crate::trig::deg_to_rad;

pub const MIN_MERIDIAN: f64 = -180.0;
pub const MAX_MERIDIAN: f64 = 180.0;
pub const MIN_PARALLEL: f64 = -90.0;
pub const MAX_PARALLEL: f64 = 90.0;

pub const DEFAULT_RADIUS: f64 = 1.0;

/// Two meridians and two parallels in degrees, plus the sphere radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularInput {
    pub meridian1: f64,
    pub meridian2: f64,
    pub parallel1: f64,
    pub parallel2: f64,
    pub radius: f64,
}

/// Range-checked input with every angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadianInput {
    pub mrd1: f64,
    pub mrd2: f64,
    pub par1: f64,
    pub par2: f64,
    pub radius: f64,
}

impl AngularInput {
    pub fn new(meridian1: f64, meridian2: f64, parallel1: f64, parallel2: f64) -> Self {
        AngularInput {
            meridian1,
            meridian2,
            parallel1,
            parallel2,
            radius: DEFAULT_RADIUS,
        }
    }

    pub fn with_radius(self, radius: f64) -> Self {
        AngularInput { radius, ..self }
    }

    /// Checks the bounds on the degree values, then converts to radians.
    ///
    /// Meridians are checked before parallels, and the radius last.
    pub fn validate(self) -> Result<RadianInput> {
        for value in [self.meridian1, self.meridian2] {
            if !(MIN_MERIDIAN..=MAX_MERIDIAN).contains(&value) {
                return Err(Error::InvalidMeridian { value });
            }
        }
        for value in [self.parallel1, self.parallel2] {
            if !(MIN_PARALLEL..=MAX_PARALLEL).contains(&value) {
                return Err(Error::InvalidParallel { value });
            }
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidRadius { value: self.radius });
        }

        Ok(RadianInput {
            mrd1: deg_to_rad(self.meridian1),
            mrd2: deg_to_rad(self.meridian2),
            par1: deg_to_rad(self.parallel1),
            par2: deg_to_rad(self.parallel2),
            radius: self.radius,
        })
    }
}
