//! The corner angle of a cell bounded by two meridians and two parallels.
//!
//! Three corners of the cell are placed on a sphere, moved into R3, and the
//! angle at the corner they share is taken between the two chords leaving it.

pub mod angle;
pub mod error;
pub mod input;
pub mod proj;
pub mod trig;

use tracing::debug;

pub use error::{Error, Result};
pub use input::{AngularInput, RadianInput};
pub use proj::{Pt, SphericalPoint, Triangle};

use angle::{angle_between, edge_vectors, DEGENERATE_EPS};
use trig::rad_to_deg;

/// Every intermediate of one run, ending in the angle at `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub input: RadianInput,
    pub triangle: Triangle,
    pub p: Pt,
    pub q: Pt,
    pub r: Pt,
    pub u: Pt,
    pub v: Pt,
    pub angle_rad: f64,
    pub angle_deg: f64,
}

pub fn compute(input: AngularInput) -> Result<Solution> {
    debug!(?input, "degrees");
    let input = input.validate()?;
    debug!(
        mrd1 = input.mrd1,
        mrd2 = input.mrd2,
        par1 = input.par1,
        par2 = input.par2,
        radius = input.radius,
        "radians"
    );

    let triangle = Triangle::from_radians(&input);
    debug!(a = ?triangle.a, b = ?triangle.b, c = ?triangle.c, "spherical");

    let [p, q, r] = triangle.to_r3(input.radius);
    debug!(?p, ?q, ?r, "cartesian");

    let (u, v) = edge_vectors(p, q, r);
    debug!(?u, ?v, "edges");

    // the angle is scale free, so measure it on the unit sphere where the
    // squared lengths can neither overflow nor underflow
    let [p1, q1, r1] = triangle.to_r3(1.0);
    let (u1, v1) = edge_vectors(p1, q1, r1);
    let angle_rad = angle_between(u1, v1, DEGENERATE_EPS)?;
    debug!(angle_rad, "angle");

    Ok(Solution {
        input,
        triangle,
        p,
        q,
        r,
        u,
        v,
        angle_rad,
        angle_deg: rad_to_deg(angle_rad),
    })
}
