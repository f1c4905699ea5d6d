use super::curve::*;
use super::super::geo::*;

use roots::{find_roots_linear, find_roots_quadratic};

///
/// Finds the t values where one component of a quadratic or cubic curve has a zero gradient
///
/// The components are the values of one dimension of the control points. Straight lines have no
/// interior extremes, and curves with more than 4 points aren't solved (returning no extremes).
///
pub fn component_extremes(components: &[f64]) -> Vec<f64> {
    let roots = match components {
        &[a, b, c] => {
            // The derivative is linear: (a-2b+c)t + (b-a) = 0, ie t = (a-b)/(a-2b+c)
            let denominator = a - b*2.0 + c;
            if denominator == 0.0 {
                return vec![];
            }

            find_roots_linear(denominator, b-a)
        }

        &[a, b, c, d] => {
            // The derivative is quadratic, with a discriminant proportional to -ac+ad+b^2-bc-bd+c^2. If the leading
            // coefficient is 0 the curve is really a quadratic and this falls back to a linear solve
            let t_squared   = -a + b*3.0 - c*3.0 + d;
            let t_linear    = (a - b*2.0 + c)*2.0;
            let constant    = b - a;

            if t_squared == 0.0 && t_linear == 0.0 {
                return vec![];
            }

            find_roots_quadratic(t_squared, t_linear, constant)
        }

        _ => { return vec![]; }
    };

    roots.as_ref().iter()
        .copied()
        .filter(|t| *t >= 0.0 && *t <= 1.0)
        .collect()
}

impl Bezier {
    ///
    /// Finds the t values where this curve has extremities (the points where the x or y value is at a minimum or maximum)
    ///
    /// Only lines, quadratic and cubic curves are solved exactly: higher order curves return an empty list.
    ///
    pub fn find_extremities(&self) -> Vec<f64> {
        let xs = self.points().iter().map(|point| point.x()).collect::<Vec<_>>();
        let ys = self.points().iter().map(|point| point.y()).collect::<Vec<_>>();

        let mut extremes = component_extremes(&xs);
        extremes.extend(component_extremes(&ys));

        extremes
    }

    ///
    /// Computes the bounds of this bezier curve
    ///
    /// This is exact for curves of up to 4 control points. Higher order curves are rare, so for those this
    /// falls back to the box around the control points, which contains the curve but may be larger than it.
    ///
    pub fn bounding_box(&self) -> Bounds {
        if self.num_points() > 4 {
            return self.fast_bounding_box();
        }

        let candidates = self.find_extremities().into_iter()
            .chain(vec![0.0, 1.0])
            .map(|t| self.point_at_pos(t));

        Bounds::bounds_for_points(candidates)
    }

    ///
    /// Faster but less accurate bounding box for a curve
    ///
    /// This will produce a bounding box that contains the curve but which may be larger than necessary
    ///
    #[inline]
    pub fn fast_bounding_box(&self) -> Bounds {
        Bounds::bounds_for_points(self.points().iter().copied())
    }

    ///
    /// Computes the bounds of this curve after rotating it so the line between its start and end points is horizontal
    ///
    /// For a curve that's nearly straight this is much thinner than the axis-aligned bounding box, which is what
    /// lets the flattening and offsetting algorithms stop subdividing diagonal curves. The result is in the
    /// rotated coordinate space (with the start point at the origin), so only its size is meaningful.
    ///
    pub fn best_fit_bounding_box(&self) -> Bounds {
        let origin  = self.start_point();
        let angle   = (self.end_point() - origin).angle();
        let rotated = self.map_points(|point| (point - origin).rotate(-angle));

        rotated.bounding_box()
    }
}

///
/// True if two bounding boxes overlap (including when they are only touching)
///
#[inline]
pub fn bounds_intersect(a: &Bounds, b: &Bounds) -> bool {
    a.overlaps(b)
}
