use crate::error::{Error, Result};
use crate::proj::Pt;
use crate::trig::acos;

use vecmath::{vec3_dot, vec3_len, vec3_sub};

/// Edges shorter than this on the unit sphere count as zero.
pub const DEGENERATE_EPS: f64 = 1e-12;

/// Both edges leave the shared corner `q`: `u = p - q`, `v = r - q`.
pub fn edge_vectors(p: Pt, q: Pt, r: Pt) -> (Pt, Pt) {
    (vec3_sub(p, q), vec3_sub(r, q))
}

/// Angle between `u` and `v` in radians, in `[0, π]`.
///
/// `min_len` is the length below which an edge is treated as collapsed.
pub fn angle_between(u: Pt, v: Pt, min_len: f64) -> Result<f64> {
    let lu = vec3_len(u);
    let lv = vec3_len(v);
    if !(lu > min_len && lv > min_len) {
        return Err(Error::DegenerateTriangle);
    }
    // rounding can push the ratio a hair outside acos's domain
    let cos_theta = (vec3_dot(u, v) / (lu * lv)).clamp(-1.0, 1.0);
    Ok(acos(cos_theta))
}
