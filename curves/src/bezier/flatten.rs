use super::set::*;
use super::curve::*;
use super::super::error::*;
use super::super::settings::*;
use super::super::coordinate::*;
use super::super::consts::*;

///
/// Converts a curve into a polyline, by splitting it in half until each piece is flat enough to be treated as a line
///
/// A piece is flat once its best-fit bounding box is thinner than `settings.tolerance` in either direction.
/// The pieces are always split at t=0.5. The result starts at the start point of the curve, ends at its end
/// point and contains no two consecutive points that are approximately the same.
///
pub fn flatten(curve: &Bezier, settings: &CurveSettings) -> CurveResult<Vec<Coord2>> {
    let mut points  = vec![];
    let mut pending = vec![(curve.clone(), 0)];

    // Right-hand halves are pushed first so the pieces are visited in order along the curve
    while let Some((piece, depth)) = pending.pop() {
        if piece.best_fit_bounding_box().is_thin(settings.tolerance) {
            trace!("Flat piece {:?} -> {:?} at depth {}", piece.start_point(), piece.end_point(), depth);

            points.push(piece.start_point());
            points.push(piece.end_point());
        } else if depth >= settings.max_subdivision_depth {
            warn!("Gave up flattening curve from {:?} after {} subdivisions", curve.start_point(), depth);
            return Err(CurveError::SubdivisionTooDeep { operation: "flatten", depth: depth });
        } else {
            let (left, right) = piece.subdivide(0.5);

            pending.push((right, depth+1));
            pending.push((left, depth+1));
        }
    }

    Ok(unique_points(&points))
}

///
/// Flattens every curve in a set and joins the results into a single polyline
///
pub fn flatten_set(curves: &BezierSet, settings: &CurveSettings) -> CurveResult<Vec<Coord2>> {
    let mut points = vec![];

    for curve in curves.iter() {
        points.extend(flatten(curve, settings)?);
    }

    let points = unique_points(&points);
    debug!("Flattened {} curves into {} points", curves.len(), points.len());

    Ok(points)
}

///
/// Flattens several sets of curves into a single polyline
///
pub fn flatten_sets<'a, SetIter: IntoIterator<Item=&'a BezierSet>>(sets: SetIter, settings: &CurveSettings) -> CurveResult<Vec<Coord2>> {
    let mut points = vec![];

    for set in sets {
        points.extend(flatten_set(set, settings)?);
    }

    Ok(unique_points(&points))
}

///
/// Flattens a curve by evaluating it at fixed steps of t
///
/// This is much less efficient than `flatten` (straight sections get as many points as tight bends) but the
/// number of points is predictable. `step` must be greater than 0 and need no more than `MAX_UNIFORM_STEPS` steps.
///
pub fn flatten_uniform(curve: &Bezier, step: f64) -> CurveResult<Vec<Coord2>> {
    if !(step > 0.0) || 1.0/step > MAX_UNIFORM_STEPS as f64 {
        return Err(CurveError::InvalidParameter(step));
    }

    let num_steps   = (1.0/step).ceil() as usize;
    let points      = (0..num_steps)
        .map(|idx| (idx as f64)*step)
        .filter(|t| *t < 1.0)
        .chain(Some(1.0))
        .map(|t| curve.point_at_pos(t))
        .collect::<Vec<_>>();

    Ok(unique_points(&points))
}
