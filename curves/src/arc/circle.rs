use super::super::bezier::*;
use super::super::coordinate::*;

use std::f64::consts::PI;

/// Angle covered by one quadrant of a circle
const QUADRANT_ANGLE: f64 = PI / 2.0;

/// Number of bisection steps used when finding the t value for an angle within a quadrant
const ANGLE_SEARCH_STEPS: usize = 40;

///
/// The cubic bezier approximating a quarter circle from (radius, 0) to (0, radius), centred on the origin
///
fn quadrant_curve(radius: f64) -> Bezier {
    let k = (4.0 * (f64::sqrt(2.0) - 1.0) / 3.0) * radius;

    Bezier::from_valid_points(vec![Coord2(radius, 0.0), Coord2(radius, k), Coord2(k, radius), Coord2(0.0, radius)])
}

///
/// Finds the t value where a quadrant curve reaches an angle (between 0 and pi/2)
///
/// The curve is symmetrical but the angle doesn't increase linearly with t, so this searches for it
///
fn quadrant_t_for_angle(quadrant: &Bezier, angle: f64) -> f64 {
    let (mut low, mut high) = (0.0, 1.0);

    for _ in 0..ANGLE_SEARCH_STEPS {
        let mid = (low + high) * 0.5;

        if quadrant.point_at_pos(mid).angle() < angle {
            low = mid;
        } else {
            high = mid;
        }
    }

    (low + high) * 0.5
}

///
/// Approximates a circular arc with a series of cubic bezier curves
///
/// The arc is centred on the origin and runs anticlockwise (with the y axis pointing up) from `from_angle`
/// to `to_angle`. If `from_angle` is greater than `to_angle`, it's moved back by whole turns first, so the
/// arc always covers less than a full turn unless the angles are more than a full turn apart. Each quadrant
/// of the arc is a separate curve, so this returns at most 4 curves (none if the two angles are the same).
///
pub fn circle_arc(radius: f64, from_angle: f64, to_angle: f64) -> Vec<Bezier> {
    if !from_angle.is_finite() || !to_angle.is_finite() {
        return vec![];
    }

    // Normalize so that from_angle <= to_angle
    let mut from_angle = from_angle;
    if from_angle > to_angle {
        from_angle -= ((from_angle - to_angle) / (PI * 2.0)).ceil() * PI * 2.0;
    }

    let num_quadrants   = (to_angle - from_angle) / QUADRANT_ANGLE;
    let quadrant        = quadrant_curve(radius);
    let mut arcs        = vec![];

    for quadrant_idx in 0..4 {
        // Fraction of this quadrant that's covered by the arc
        let quadrant_start  = quadrant_idx as f64;
        let fraction        = num_quadrants.max(quadrant_start).min(quadrant_start + 1.0) - quadrant_start;

        if fraction <= 0.0 {
            continue;
        }

        let piece = if fraction >= 1.0 {
            quadrant.clone()
        } else {
            let t = quadrant_t_for_angle(&quadrant, fraction * QUADRANT_ANGLE);
            quadrant.subdivide(t).0
        };

        let rotation = from_angle + quadrant_start * QUADRANT_ANGLE;
        arcs.push(piece.map_points(|point| point.rotate(rotation)));
    }

    arcs
}
