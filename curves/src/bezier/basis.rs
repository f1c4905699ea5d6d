use super::curve::*;
use super::combinatorics::*;
use super::super::error::*;
use super::super::coordinate::*;

///
/// The Bernstein basis polynomial nCv * t^v * (1-t)^(n-v)
///
pub fn bernstein(n: usize, v: usize, t: f64) -> CurveResult<f64> {
    Ok(choose(n, v)? * t.powi(v as i32) * (1.0-t).powi((n-v) as i32))
}

#[inline]
fn bernstein_weight(n: usize, v: usize, t: f64) -> f64 {
    binomial(n, v) * t.powi(v as i32) * (1.0-t).powi((n-v) as i32)
}

///
/// Evaluates the bezier curve with the specified control points at t
///
/// Any number of points between 1 and MAX_FACTORIAL+1 can be passed in, which means this can also evaluate the
/// derivative of a straight line (which has only a single point)
///
pub(crate) fn basis(t: f64, points: &[Coord2]) -> Coord2 {
    let n = points.len() - 1;

    if points.len() == 3 {
        // Quadratic curves are the most common, so skip the general version for these
        let one_minus_t = 1.0-t;
        let w0          = one_minus_t*one_minus_t;
        let w1          = 2.0*one_minus_t*t;
        let w2          = t*t;

        points[0]*w0 + points[1]*w1 + points[2]*w2
    } else {
        points.iter()
            .enumerate()
            .fold(Coord2::origin(), |point, (v, control_point)| point + *control_point*bernstein_weight(n, v, t))
    }
}

impl Bezier {
    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        basis(t, self.points())
    }
}
