// this is kinda silly but it's so much more readable without the `f64::` everywhere
use std::f64::consts::TAU;

/// Radians per degree.
pub const CONV: f64 = TAU / 360.0;

pub fn cos(x: f64) -> f64 {
    x.cos()
}
pub fn sin(x: f64) -> f64 {
    x.sin()
}
pub fn acos(x: f64) -> f64 {
    x.acos()
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * CONV
}
pub fn rad_to_deg(rad: f64) -> f64 {
    rad / CONV
}
