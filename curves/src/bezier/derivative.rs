use super::curve::*;
use super::basis::*;
use super::super::error::*;
use super::super::coordinate::*;

///
/// The control points of the derivative of the bezier curve with the specified points
///
/// Each point is the difference between two neighbouring control points, scaled by the number of
/// control points. Only the direction of the derivative is used when offsetting, so the scale factor
/// just needs to be consistent.
///
pub(crate) fn derivative_points(points: &[Coord2]) -> Vec<Coord2> {
    let scale = points.len() as f64;

    points.windows(2)
        .map(|pair| (pair[1]-pair[0])*scale)
        .collect()
}

impl Bezier {
    ///
    /// Returns the curve describing the derivative of this one
    ///
    /// The derivative has one fewer control point, so the derivative of a straight line (a single constant
    /// value) can't be represented as a curve. Use `tangent_at_pos` to find the direction of a line.
    ///
    pub fn derivative(&self) -> CurveResult<Bezier> {
        Bezier::new(derivative_points(self.points()))
    }

    ///
    /// Returns the unit vector in the direction of this curve at the specified t value
    ///
    /// Where the derivative has no length (for instance, if a control point is on top of the start
    /// point and t is 0) the direction is undefined and this returns `None`.
    ///
    pub fn tangent_at_pos(&self, t: f64) -> Option<Coord2> {
        let derivative  = basis(t, &derivative_points(self.points()));
        let length      = derivative.magnitude();

        if length <= f64::EPSILON || length.is_nan() {
            None
        } else {
            Some(derivative * (1.0/length))
        }
    }

    ///
    /// Returns the unit vector perpendicular to this curve at the specified t value (rotated anticlockwise from the tangent)
    ///
    #[inline]
    pub fn normal_at_pos(&self, t: f64) -> Option<Coord2> {
        self.tangent_at_pos(t)
            .map(|tangent| tangent.perpendicular())
    }
}
