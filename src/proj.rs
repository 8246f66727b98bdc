use crate::input::RadianInput;
use crate::trig::*; // rexports float methods as functions

use vecmath::Vector3;

pub type Pt = Vector3<f64>;

/// Latitude and longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPoint {
    pub lat: f64,
    pub lon: f64,
}

impl SphericalPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        SphericalPoint { lat, lon }
    }
}

//   mrd1    mrd2
//    |       |
//   -a-------+--par1
//    |       |
//   -b-------c--par2
//    |       |
//
// a and b share the first meridian, b and c share the second parallel.
// The angle is measured at b.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: SphericalPoint,
    pub b: SphericalPoint,
    pub c: SphericalPoint,
}

impl Triangle {
    pub fn from_radians(input: &RadianInput) -> Self {
        Triangle {
            a: SphericalPoint::new(input.par1, input.mrd1),
            b: SphericalPoint::new(input.par2, input.mrd1),
            c: SphericalPoint::new(input.par2, input.mrd2),
        }
    }

    pub fn to_r3(&self, radius: f64) -> [Pt; 3] {
        [
            sphere_to_r3(self.a, radius),
            sphere_to_r3(self.b, radius),
            sphere_to_r3(self.c, radius),
        ]
    }
}

/// Latitude is measured from the equatorial plane. No special casing at the poles.
pub fn sphere_to_r3(point: SphericalPoint, radius: f64) -> Pt {
    let SphericalPoint { lat, lon } = point;
    [ radius * cos(lat) * cos(lon)
    , radius * cos(lat) * sin(lon)
    , radius * sin(lat)
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    use vecmath::vec3_len;

    fn close(p: Pt, q: Pt) -> bool {
        p.iter().zip(q.iter()).all(|(a, b)| (a - b).abs() < 1e-12)
    }

    #[test]
    fn corners_share_lines() {
        let input = RadianInput { mrd1: 0.1, mrd2: 0.2, par1: 0.3, par2: 0.4, radius: 1.0 };
        let t = Triangle::from_radians(&input);
        assert_eq!(t.a, SphericalPoint::new(0.3, 0.1));
        assert_eq!(t.b, SphericalPoint::new(0.4, 0.1));
        assert_eq!(t.c, SphericalPoint::new(0.4, 0.2));
    }

    #[test]
    fn axes() {
        assert!(close(sphere_to_r3(SphericalPoint::new(0.0, 0.0), 2.0), [2.0, 0.0, 0.0]));
        assert!(close(sphere_to_r3(SphericalPoint::new(0.0, FRAC_PI_2), 2.0), [0.0, 2.0, 0.0]));
        assert!(close(sphere_to_r3(SphericalPoint::new(FRAC_PI_2, 1.0), 2.0), [0.0, 0.0, 2.0]));
    }

    #[test]
    fn points_lie_on_sphere() {
        for &(lat, lon) in &[(0.3, -2.0), (-FRAC_PI_4, 3.0), (1.2, 0.0)] {
            let p = sphere_to_r3(SphericalPoint::new(lat, lon), 6371.0);
            assert!((vec3_len(p) - 6371.0).abs() < 1e-9);
        }
    }
}
