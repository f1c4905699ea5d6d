use super::set::*;
use super::offset::*;
use super::flatten::*;
use super::intersection::*;
use super::super::arc::*;
use super::super::error::*;
use super::super::settings::*;
use super::super::coordinate::*;

use std::f64::consts::PI;

///
/// How two offset curves are connected where the curves they were offset from meet
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JointStyle {
    /// The offset curves already meet: no joint is needed
    Continuous,

    /// The offset curves move apart (the outside of a bend): they're connected by a circular arc
    Round,

    /// The offset curves cross (the inside of a bend): they're cut short where they intersect
    Clip
}

///
/// Decides how to join the end of one offset curve (`left`) to the start of the next (`right`) around the point `centre`
///
/// This uses the signed area of the triangle formed by the three points. `distance` is the offset distance,
/// whose sign determines which side of the path the offset curves are on.
///
pub fn joint_style(left: Coord2, centre: Coord2, right: Coord2, distance: f64) -> JointStyle {
    if left.is_near_to(&right) {
        return JointStyle::Continuous;
    }

    let area = contour_area(&[left, centre, right]) * distance.signum();

    if area > 0.0 {
        JointStyle::Round
    } else if area < 0.0 {
        JointStyle::Clip
    } else {
        // Offset ends on opposite sides of the centre: the path doubles back on itself
        JointStyle::Round
    }
}

///
/// Generates the curves for a circular arc around a centre point, running from `start_angle` to `end_angle`
///
/// Arcs for a positive offset distance run clockwise and arcs for a negative distance run anticlockwise.
///
fn arc_around(centre: Coord2, distance: f64, start_angle: f64, end_angle: f64) -> BezierSet {
    let radius = distance.abs();

    let arc = if distance >= 0.0 {
        // circle_arc always runs anticlockwise, so generate the arc backwards and reverse it
        BezierSet::from_curves(circle_arc(radius, end_angle, start_angle)).reverse()
    } else {
        BezierSet::from_curves(circle_arc(radius, start_angle, end_angle))
    };

    arc.translate(centre)
}

///
/// Creates the half-circle cap at the start of an offset path
///
/// `centre` is the start of the path and `towards` is a point indicating the direction the path leaves it in. The
/// cap runs around the back of the start point, from the end of the reversed path's offset to the start of the
/// path's offset.
///
pub fn offset_cap(centre: Coord2, towards: Coord2, distance: f64) -> BezierSet {
    let direction   = (towards - centre).angle();
    let side        = if distance >= 0.0 { PI/2.0 } else { -PI/2.0 };

    arc_around(centre, distance, direction - side, direction + side)
}

///
/// Creates the circular joint connecting the offset curves `left` and `right` around `centre`
///
pub fn offset_joint(centre: Coord2, left: Coord2, right: Coord2, distance: f64) -> BezierSet {
    let left_angle  = (left - centre).angle();
    let right_angle = (right - centre).angle();

    arc_around(centre, distance, left_angle, right_angle)
}

///
/// Offsets a path made up of a series of curves, with a round cap at the start and joints between the curves
///
/// Each curve is offset with `offset_adaptive`. Where the offset curves move apart at a join they're connected
/// with a circular arc. Where they cross (because the offset distance is larger than the radius of the bend) they're
/// cut short at the point where they cross instead, so the result doesn't loop back over itself. The result is
/// flattened into a polyline using the tolerance from the settings.
///
/// There's only a cap at the start: offsetting the reversed path adds a cap at the other end, which is how
/// `offset_contour` builds a complete outline.
///
pub fn offset_with_joints(path: &BezierSet, distance: f64, settings: &CurveSettings) -> CurveResult<Vec<Coord2>> {
    let first_curve = match path.first() {
        Some(curve) => curve,
        None        => { return Ok(vec![]); }
    };

    // Offset every curve (no joints or caps yet)
    let mut offset_sets = vec![];
    for curve in path.iter() {
        offset_sets.push(BezierSet::from_curves(offset_adaptive(curve, distance, settings)?));
    }

    // Cap on the start, then join the curves
    let cap_direction   = first_curve.points()[1];
    let mut output_sets = vec![offset_cap(first_curve.start_point(), cap_direction, distance)];
    let mut offset_sets = offset_sets.into_iter();

    output_sets.extend(offset_sets.next());

    for (curve, right_set) in path.iter().skip(1).zip(offset_sets) {
        let left_set = match output_sets.pop() {
            Some(set)   => set,
            None        => right_set.clone()
        };

        let (left, right) = match (left_set.last(), right_set.first()) {
            (Some(left), Some(right))   => (left.end_point(), right.start_point()),
            _                           => {
                output_sets.push(left_set);
                output_sets.push(right_set);
                continue;
            }
        };

        let centre  = curve.start_point();
        let style   = joint_style(left, centre, right, distance);
        debug!("Joining offset curves at {:?} using {:?}", centre, style);

        match style {
            JointStyle::Continuous => {
                output_sets.push(left_set);
                output_sets.push(right_set);
            }

            JointStyle::Round => {
                output_sets.push(left_set);
                output_sets.push(offset_joint(centre, left, right, distance));
                output_sets.push(right_set);
            }

            JointStyle::Clip => {
                // Both sets are cut back from the joint, so clip the right-hand set from its end
                let (clipped_left, clipped_right) = clip_at_first_intersection(&left_set, &right_set.reverse(), settings)?;

                output_sets.push(clipped_left);
                output_sets.push(clipped_right.reverse());
            }
        }
    }

    flatten_sets(&output_sets, settings)
}

///
/// Computes the outline of a path widened to `radius` in both directions
///
/// This is the offset of the path followed by the offset of the reversed path, each with a round cap at their
/// start, giving a closed polygon (the last point joins back up to the first).
///
pub fn offset_contour(path: &BezierSet, radius: f64, settings: &CurveSettings) -> CurveResult<Vec<Coord2>> {
    let mut contour = offset_with_joints(path, radius, settings)?;
    contour.extend(offset_with_joints(&path.reverse(), radius, settings)?);

    debug!("Generated contour with {} points for a path of {} curves", contour.len(), path.len());

    Ok(contour)
}

